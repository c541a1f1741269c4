//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API: app-only
//! authentication and playlist retrieval. It handles all HTTP
//! communication with the platform, token lifecycle bookkeeping, and the
//! mapping of HTTP failures into the crate error taxonomy.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     └── Playlist Operations (metadata, paginated track listing)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The [`auth`] module implements the OAuth 2.0 client-credentials grant:
//! the application authenticates itself (not a user) with its client ID
//! and secret via HTTP Basic auth against the token endpoint, receiving a
//! short-lived bearer token. The token is cached in memory and refreshed
//! transparently once it expires; no token ever touches disk.
//!
//! ## Error Handling
//!
//! No retries are performed at this layer. Rate-limit responses (429)
//! surface as [`crate::error::AoideError::RateLimited`] with the
//! `Retry-After` hint when the platform provides one; a caller that needs
//! resilience must retry at a higher layer.
//!
//! ## API Coverage
//!
//! - `POST {auth_url}` - client-credentials token grant
//! - `GET /playlists/{id}` - playlist metadata (name only)
//! - `GET /playlists/{id}/tracks` - track listing with offset pagination

pub mod auth;
pub mod playlist;
