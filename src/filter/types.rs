//! Filter types, one per entity kind
//!
//! All fields are optional; an empty filter matches everything. `validate`
//! fails fast with a validation error and is called by every listing
//! operation before its network request.

use super::validation::{check_address, check_index_id, check_timestamp};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Filter for token listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFilter {
    /// Restrict to tokens that are (or are not) on the canonical list
    pub is_listed: Option<bool>,
}

impl TokenFilter {
    /// Validate shape and ranges
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Filter for distribution index listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFilter {
    /// Restrict to a publisher-chosen index id
    pub index_id: Option<String>,
    /// Restrict to indexes published by this account
    pub publisher: Option<String>,
    /// Restrict to indexes over this token
    pub token: Option<String>,
}

impl IndexFilter {
    /// Validate shape and ranges
    pub fn validate(&self) -> Result<()> {
        check_index_id("index_id", &self.index_id)?;
        check_address("publisher", &self.publisher)?;
        check_address("token", &self.token)?;
        Ok(())
    }
}

/// Filter for index subscription listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSubscriptionFilter {
    /// Restrict to subscriptions held by this account
    pub subscriber: Option<String>,
    /// Restrict by approval state
    pub approved: Option<bool>,
}

impl IndexSubscriptionFilter {
    /// Validate shape and ranges
    pub fn validate(&self) -> Result<()> {
        check_address("subscriber", &self.subscriber)?;
        Ok(())
    }
}

/// Filter for stream listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamFilter {
    /// Restrict to streams sent by this account
    pub sender: Option<String>,
    /// Restrict to streams received by this account
    pub receiver: Option<String>,
    /// Restrict to streams of this token
    pub token: Option<String>,
}

impl StreamFilter {
    /// Validate shape and ranges
    pub fn validate(&self) -> Result<()> {
        check_address("sender", &self.sender)?;
        check_address("receiver", &self.receiver)?;
        check_address("token", &self.token)?;
        Ok(())
    }
}

/// Filter for account/token balance snapshot listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTokenSnapshotFilter {
    /// Restrict to snapshots of this account
    pub account: Option<String>,
    /// Restrict to snapshots of this token
    pub token: Option<String>,
}

impl AccountTokenSnapshotFilter {
    /// Validate shape and ranges
    pub fn validate(&self) -> Result<()> {
        check_address("account", &self.account)?;
        check_address("token", &self.token)?;
        Ok(())
    }
}

/// Filter for protocol event listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Restrict to events touching this account
    pub account: Option<String>,
    /// Only events strictly newer than this epoch second
    pub timestamp_gt: Option<i64>,
}

impl EventFilter {
    /// Validate shape and ranges
    pub fn validate(&self) -> Result<()> {
        check_address("account", &self.account)?;
        check_timestamp("timestamp_gt", self.timestamp_gt)?;
        Ok(())
    }
}
