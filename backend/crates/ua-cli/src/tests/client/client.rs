use crate::Client;

use ua_config::ApiConfig;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3001/");
    assert_eq!(client.base_url, "http://localhost:3001");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3001");
    assert_eq!(client.base_url, "http://localhost:3001");
}

#[test]
fn test_includes_inactive_by_default() {
    let client = Client::new("http://localhost:3001");
    assert!(client.include_inactive);
}

#[test]
fn test_from_config_copies_settings() {
    let config = ApiConfig {
        base_url: Some("https://users.example.com//".to_string()),
        include_inactive: false,
    };
    let client = Client::from_config(&config).unwrap();
    assert_eq!(client.base_url, "https://users.example.com");
    assert!(!client.include_inactive);
}

#[test]
fn test_from_config_without_base_url_fails() {
    assert!(Client::from_config(&ApiConfig::default()).is_err());
}
