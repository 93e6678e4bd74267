pub const API_NAME: &str = "[ferry-cars-api]";

pub const RECORD_NOT_FOUND: &str = "Record not found";
