/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Login and student card models
pub mod auth;
/// Named data endpoints of the portal
pub mod endpoint;
/// HTTP request helper
pub mod http;
/// Protocol version renegotiation
pub mod version;
