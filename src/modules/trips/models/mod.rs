pub mod trip;

pub use trip::{NewTrip, SourceApp, Trip, TripPayload, TripType};
