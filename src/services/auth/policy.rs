//! Route policy table consulted by the authorization gate.
//!
//! Rules are evaluated in insertion order; the first rule whose method and path
//! pattern match decides. Requests matching no rule get the fallback access.
//!
//! Pattern syntax:
//! - literal segments: `/api/v1/authors`
//! - single-segment placeholders: `/api/v1/authors/{id}`
//! - trailing `*`: any remaining suffix, including none (`/api/v1/auth/*`)
use axum::http::Method;

use crate::services::auth::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Roles(Vec<Role>),
}

impl Access {
    pub fn any_of(roles: &[Role]) -> Self {
        Access::Roles(roles.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
}

#[derive(Debug, Clone)]
struct PathPattern {
    segments: Vec<Segment>,
    open_suffix: bool,
}

impl PathPattern {
    fn parse(pattern: &str) -> Self {
        let mut parts: Vec<&str> = split_path(pattern).collect();

        let open_suffix = parts.last() == Some(&"*");
        if open_suffix {
            parts.pop();
        }

        let segments = parts
            .into_iter()
            .map(|part| {
                if part.starts_with('{') && part.ends_with('}') {
                    Segment::Param
                } else {
                    Segment::Literal(part.to_string())
                }
            })
            .collect();

        Self {
            segments,
            open_suffix,
        }
    }

    fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = split_path(path).collect();

        if parts.len() < self.segments.len() {
            return false;
        }
        if !self.open_suffix && parts.len() != self.segments.len() {
            return false;
        }

        self.segments
            .iter()
            .zip(parts.iter())
            .all(|(segment, part)| match segment {
                Segment::Literal(lit) => lit == part,
                Segment::Param => !part.is_empty(),
            })
    }
}

// Empty segments are ignored, so `/a//b/` and `/a/b` are the same path
fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[derive(Debug, Clone)]
struct PolicyRule {
    // None = any method
    method: Option<Method>,
    pattern: PathPattern,
    access: Access,
}

#[derive(Debug, Clone)]
pub struct RoutePolicy {
    rules: Vec<PolicyRule>,
    fallback: Access,
}

impl RoutePolicy {
    pub fn new(fallback: Access) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Rule for every method on `pattern`.
    pub fn any(self, pattern: &str, access: Access) -> Self {
        self.push(None, pattern, access)
    }

    /// Rule for a single method on `pattern`.
    pub fn on(self, method: Method, pattern: &str, access: Access) -> Self {
        self.push(Some(method), pattern, access)
    }

    fn push(mut self, method: Option<Method>, pattern: &str, access: Access) -> Self {
        self.rules.push(PolicyRule {
            method,
            pattern: PathPattern::parse(pattern),
            access,
        });
        self
    }

    /// A GET rule also covers HEAD, since axum routes HEAD to GET handlers.
    pub fn resolve(&self, method: &Method, path: &str) -> &Access {
        self.rules
            .iter()
            .find(|rule| {
                rule.method
                    .as_ref()
                    .is_none_or(|m| method_matches(m, method))
                    && rule.pattern.matches(path)
            })
            .map(|rule| &rule.access)
            .unwrap_or(&self.fallback)
    }
}

fn method_matches(rule: &Method, request: &Method) -> bool {
    rule == request || (*rule == Method::GET && *request == Method::HEAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_rule_covers_head() {
        let admin = Access::any_of(&[Role::Admin]);
        let policy = RoutePolicy::new(Access::Authenticated)
            .on(Method::GET, "/items/*", admin.clone())
            .on(Method::POST, "/upload", Access::Public);

        assert_eq!(policy.resolve(&Method::HEAD, "/items"), &admin);
        assert_eq!(policy.resolve(&Method::HEAD, "/items/3"), &admin);
        // other methods do not extend to HEAD
        assert_eq!(
            policy.resolve(&Method::HEAD, "/upload"),
            &Access::Authenticated
        );
    }

    fn table() -> RoutePolicy {
        RoutePolicy::new(Access::Authenticated)
            .any("/health", Access::Public)
            .any("/api/v1/auth/*", Access::Public)
            .on(Method::GET, "/api/v1/authors/*", Access::any_of(&[Role::Admin, Role::Customer]))
            .on(Method::DELETE, "/api/v1/authors/{id}", Access::any_of(&[Role::Admin]))
    }

    #[test]
    fn literal_and_wildcard_matches() {
        let policy = table();
        assert_eq!(policy.resolve(&Method::GET, "/health"), &Access::Public);
        assert_eq!(policy.resolve(&Method::POST, "/api/v1/auth/login"), &Access::Public);
        // the wildcard also matches the bare prefix
        assert_eq!(policy.resolve(&Method::POST, "/api/v1/auth"), &Access::Public);
    }

    #[test]
    fn method_is_part_of_the_match() {
        let policy = table();
        assert_eq!(
            policy.resolve(&Method::GET, "/api/v1/authors/7"),
            &Access::any_of(&[Role::Admin, Role::Customer])
        );
        assert_eq!(
            policy.resolve(&Method::DELETE, "/api/v1/authors/7"),
            &Access::any_of(&[Role::Admin])
        );
        // no rule for PUT -> fallback
        assert_eq!(
            policy.resolve(&Method::PUT, "/api/v1/authors/7"),
            &Access::Authenticated
        );
    }

    #[test]
    fn placeholders_match_exactly_one_segment() {
        let policy = table();
        assert_eq!(
            policy.resolve(&Method::DELETE, "/api/v1/authors"),
            &Access::Authenticated
        );
        assert_eq!(
            policy.resolve(&Method::DELETE, "/api/v1/authors/7/games"),
            &Access::Authenticated
        );
    }

    #[test]
    fn prefix_of_a_segment_is_not_a_match() {
        let policy = table();
        assert_eq!(
            policy.resolve(&Method::POST, "/api/v1/authentication"),
            &Access::Authenticated
        );
        assert_eq!(policy.resolve(&Method::GET, "/healthz"), &Access::Authenticated);
    }

    #[test]
    fn first_matching_rule_wins() {
        let policy = RoutePolicy::new(Access::Authenticated)
            .any("/api/v1/users/signup", Access::Public)
            .any("/api/v1/users/*", Access::any_of(&[Role::Admin]));

        assert_eq!(
            policy.resolve(&Method::POST, "/api/v1/users/signup"),
            &Access::Public
        );
        assert_eq!(
            policy.resolve(&Method::GET, "/api/v1/users/42"),
            &Access::any_of(&[Role::Admin])
        );
    }

    #[test]
    fn trailing_and_duplicate_slashes_are_ignored() {
        let policy = table();
        assert_eq!(policy.resolve(&Method::GET, "/health/"), &Access::Public);
        assert_eq!(policy.resolve(&Method::GET, "//health"), &Access::Public);
    }
}
