pub mod commands;
mod menu;
mod print;
mod setup;
