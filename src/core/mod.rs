pub mod controller;
pub mod generator;
pub mod input;
pub mod menu;
pub mod persistence;
