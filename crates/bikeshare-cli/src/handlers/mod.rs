mod report;

pub mod about;
pub mod city_prompt;
pub mod durations;
pub mod explore;
pub mod user_info;
