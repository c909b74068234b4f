mod models;
mod presence;
