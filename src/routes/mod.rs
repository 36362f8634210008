pub mod fuel_log_routes;
pub mod notification_routes;
pub mod reminder_routes;
pub mod subscription_routes;
pub mod trip_routes;
pub mod vehicle_routes;
