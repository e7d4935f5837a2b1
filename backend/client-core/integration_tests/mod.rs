mod endpoint_client;
mod helpers;
mod posts_flow;
