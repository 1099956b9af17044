/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// OAuth token models
pub mod auth;
/// Entities and verbs
pub mod entity;
/// URL and body encoding
pub mod http;
/// Request descriptors
pub mod requests;
/// Response bodies
pub mod responses;
