//! インターフェース層
//!
//! HTTP API と WebSocket エンドポイント

pub mod web;
