pub mod contact;
pub mod oauth;
