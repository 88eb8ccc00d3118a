// Core game logic modules
pub mod core;

// Services (win detection, update notifications)
pub mod services;

// API models (requests/responses)
pub mod models;

// HTTP routes
pub mod routes;

// Application state
pub mod state;
