mod auth_paths;
mod queries;
