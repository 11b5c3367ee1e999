pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewTrip, SourceApp, Trip, TripPayload, TripType};
pub use repositories::{TripFilter, TripRepository};
