//! Typed filters for list endpoints.
//!
//! Filters serialize to JSON:API query parameters (`filter[...]`,
//! `page[size]`, `sort`). Unset fields produce no parameter.

use chrono::{DateTime, Utc};

/// Wire format the API expects for timestamps in query parameters.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Filters for [`list_servers`](crate::Battlemetrics::list_servers).
#[derive(Debug, Clone, Default)]
pub struct ServerFilter {
    /// Free-text search.
    pub search: Option<String>,

    /// Restrict to one game, e.g. `"rust"`.
    pub game: Option<String>,

    /// Restrict to these country codes (any match).
    pub countries: Vec<String>,

    /// Restrict to servers of one organization.
    pub organization: Option<i64>,

    /// Filter on server status (`online`, `offline`, `dead`).
    pub status: Option<String>,

    /// Only servers with (or without) RCON connected.
    pub rcon: Option<bool>,

    /// Page size requested from the API.
    pub page_size: Option<u32>,

    /// Sort key, e.g. `"rank"` or `"-rank"`.
    pub sort: Option<String>,
}

impl ServerFilter {
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("filter[search]".to_string(), search.clone()));
        }
        if let Some(game) = &self.game {
            pairs.push(("filter[game]".to_string(), game.clone()));
        }
        for (index, country) in self.countries.iter().enumerate() {
            pairs.push((format!("filter[countries][or][{index}]"), country.clone()));
        }
        if let Some(organization) = self.organization {
            pairs.push(("filter[organizations]".to_string(), organization.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("filter[status]".to_string(), status.clone()));
        }
        if let Some(rcon) = self.rcon {
            pairs.push(("filter[rcon]".to_string(), rcon.to_string()));
        }
        push_page_size(&mut pairs, self.page_size);
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        pairs
    }
}

/// Filters for [`list_players`](crate::Battlemetrics::list_players).
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    /// Free-text search.
    pub search: Option<String>,

    /// Restrict to players seen on one server.
    pub server: Option<i64>,

    /// Restrict to players tracked by one organization.
    pub organization: Option<i64>,

    /// Only players currently online.
    pub online: Option<bool>,

    /// Page size requested from the API.
    pub page_size: Option<u32>,
}

impl PlayerFilter {
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("filter[search]".to_string(), search.clone()));
        }
        if let Some(server) = self.server {
            pairs.push(("filter[servers]".to_string(), server.to_string()));
        }
        if let Some(organization) = self.organization {
            pairs.push(("filter[organization]".to_string(), organization.to_string()));
        }
        if let Some(online) = self.online {
            pairs.push(("filter[online]".to_string(), online.to_string()));
        }
        push_page_size(&mut pairs, self.page_size);
        pairs
    }
}

/// Filters for [`list_bans`](crate::Battlemetrics::list_bans).
#[derive(Debug, Clone, Default)]
pub struct BanFilter {
    /// Restrict to bans issued on one server.
    pub server: Option<i64>,

    /// Restrict to bans of one organization.
    pub organization: Option<i64>,

    /// Restrict to one ban list.
    pub ban_list: Option<String>,

    /// Include or exclude expired bans.
    pub expired: Option<bool>,

    /// Free-text search.
    pub search: Option<String>,

    /// Page size requested from the API.
    pub page_size: Option<u32>,
}

impl BanFilter {
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(server) = self.server {
            pairs.push(("filter[server]".to_string(), server.to_string()));
        }
        if let Some(organization) = self.organization {
            pairs.push(("filter[organization]".to_string(), organization.to_string()));
        }
        if let Some(ban_list) = &self.ban_list {
            pairs.push(("filter[banList]".to_string(), ban_list.clone()));
        }
        if let Some(expired) = self.expired {
            pairs.push(("filter[expired]".to_string(), expired.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("filter[search]".to_string(), search.clone()));
        }
        push_page_size(&mut pairs, self.page_size);
        pairs
    }
}

/// Filters for session-history endpoints.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    /// UTC start of the range.
    pub start: Option<DateTime<Utc>>,

    /// UTC end of the range.
    pub stop: Option<DateTime<Utc>>,

    /// Restrict to sessions on one server.
    pub server: Option<i64>,

    /// Page size requested from the API.
    pub page_size: Option<u32>,
}

impl SessionFilter {
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start {
            pairs.push(("start".to_string(), start.format(TIME_FORMAT).to_string()));
        }
        if let Some(stop) = self.stop {
            pairs.push(("stop".to_string(), stop.format(TIME_FORMAT).to_string()));
        }
        if let Some(server) = self.server {
            pairs.push(("filter[servers]".to_string(), server.to_string()));
        }
        push_page_size(&mut pairs, self.page_size);
        pairs
    }
}

fn push_page_size(pairs: &mut Vec<(String, String)>, page_size: Option<u32>) {
    if let Some(size) = page_size {
        pairs.push(("page[size]".to_string(), size.to_string()));
    }
}
