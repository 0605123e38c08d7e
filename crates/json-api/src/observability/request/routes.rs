//! Route templates for request spans.

use uuid::Uuid;

/// Collapse identifier segments so requests for different cart lines or
/// orders share one route label.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        let route = route_template("/orders/01920c4e-6b5a-7c3d-8e9f-0a1b2c3d4e5f/cancel");

        assert_eq!(route, "/orders/{uuid}/cancel");
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template("/cart/items"), "/cart/items");
    }
}
