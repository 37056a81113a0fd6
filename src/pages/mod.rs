//! Page components, one per route.

pub mod activities;
pub mod home;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;
