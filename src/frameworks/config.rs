use std::{
    env,
    net::{IpAddr, Ipv4Addr},
};

// Runtime configuration read from the process environment.

pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub fn http_port() -> u16 {
    parse_or(env::var("PORT").ok().as_deref(), DEFAULT_HTTP_PORT)
}

pub fn http_host() -> IpAddr {
    parse_or(env::var("HOST").ok().as_deref(), DEFAULT_HTTP_HOST)
}

// Unset or unparsable values fall back to the default.
fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
