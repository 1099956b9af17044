/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Default regional domain for REST API calls
pub const DEFAULT_API_DOMAIN: &str = "https://www.zohoapis.eu";
/// Default accounts server that mints access tokens
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.zoho.eu";
/// Path prefix of the CRM API version, appended to the API domain
pub const API_PATH: &str = "/crm/v2/";
/// Path of the OAuth token endpoint on the accounts server
pub const TOKEN_PATH: &str = "/oauth/v2/token";
/// Grant type sent when exchanging a refresh token
pub const REFRESH_GRANT_TYPE: &str = "refresh_token";
/// Scheme prefix of the `Authorization` header value
pub const AUTH_SCHEME: &str = "Zoho-oauthtoken";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "zohocrm-client/0.1.0";
