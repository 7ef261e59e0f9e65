pub const ENDPOINT: &str = "/api/v1/check_token";
