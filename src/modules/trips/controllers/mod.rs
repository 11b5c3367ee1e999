pub mod trip_controller;
