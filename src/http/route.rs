use reqwest::Method;

/// A single API route: HTTP method plus target and query parameters.
///
/// A route targets either a path under the configured base URL or an
/// absolute URL (pagination cursors come back as absolute `links.next`
/// values).
#[derive(Debug, Clone)]
pub(crate) struct Route {
    pub method: Method,
    target: Target,
    query: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
enum Target {
    Path(String),
    Absolute(String),
}

impl Route {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            target: Target::Path(path.into()),
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// GET route for an absolute URL, e.g. a pagination cursor.
    pub fn absolute(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            target: Target::Absolute(url.into()),
            query: Vec::new(),
        }
    }

    /// Append one query parameter.
    #[cfg(test)]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append query parameters.
    pub fn queries(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Full request URL against the given base.
    pub fn url(&self, base: &str) -> String {
        match &self.target {
            Target::Path(path) => format!("{}{}", base.trim_end_matches('/'), path),
            Target::Absolute(url) => url.clone(),
        }
    }

    /// Path (or absolute URL) for log lines.
    pub fn path(&self) -> &str {
        match &self.target {
            Target::Path(path) | Target::Absolute(path) => path,
        }
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}
