mod error_body;
