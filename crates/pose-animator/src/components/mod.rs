pub mod animator;
pub mod config;
pub mod entity;
pub mod pose;
