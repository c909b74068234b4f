mod activity_entry;
mod timestamps;
