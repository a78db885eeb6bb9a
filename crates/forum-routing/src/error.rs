//! Error types for the routing library.

/// Errors raised while building patterns, filling them, or validating a
/// switch. Matching itself never errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// A template did not start with `/`.
    #[error("path template {template:?} must start with '/'")]
    MissingLeadingSlash {
        /// The offending template.
        template: String,
    },

    /// A `:` segment had no name after it.
    #[error("path template {template:?} has an unnamed parameter")]
    EmptyParam {
        /// The offending template.
        template: String,
    },

    /// The same parameter name appeared twice in one template.
    #[error("path template {template:?} declares parameter {name:?} twice")]
    DuplicateParam {
        /// The offending template.
        template: String,
        /// The repeated parameter name.
        name: String,
    },

    /// A parameter had no value when filling a template.
    #[error("no value for parameter {name:?} of {template:?}")]
    MissingParam {
        /// The template being filled.
        template: String,
        /// The parameter left without a value.
        name: String,
    },

    /// A switch entry can never be reached because an earlier entry
    /// matches every path it would match.
    #[error("route {route:?} is unreachable, shadowed by earlier route {by:?}")]
    Shadowed {
        /// The unreachable route.
        route: String,
        /// The earlier route that shadows it.
        by: String,
    },
}
