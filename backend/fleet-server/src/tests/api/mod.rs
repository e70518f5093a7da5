mod body;
mod error;
