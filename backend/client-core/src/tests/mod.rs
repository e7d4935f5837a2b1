mod assets;
mod config;
mod endpoint_client;
mod error_mapper;
mod view_model;
