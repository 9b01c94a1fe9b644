//! Resource and operation tags used to pick response messages

/// A table exposed through CRUD endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Product,
    User,
}

impl Resource {
    /// Lowercase singular, e.g. `product`
    pub fn name(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::User => "user",
        }
    }

    /// Capitalized singular, e.g. `Product`
    pub fn title(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::User => "User",
        }
    }

    /// Lowercase plural, also the route prefix
    pub fn plural(self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::User => "users",
        }
    }

    /// Key carrying the new id in a create response
    pub fn id_key(self) -> &'static str {
        match self {
            Self::Product => "productId",
            Self::User => "userId",
        }
    }
}

/// The five CRUD operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// 500 body message. Never includes the underlying error.
    pub fn storage_error_message(self, resource: Resource) -> String {
        match self {
            Self::List => format!("Error retrieving {}", resource.plural()),
            Self::Get => format!("Error retrieving {}", resource.name()),
            Self::Create => format!("Error creating {}", resource.name()),
            Self::Update => format!("Error updating {}", resource.name()),
            Self::Delete => format!("Error deleting {}", resource.name()),
        }
    }
}

/// Operations that address a single row by id and can miss it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Get,
    Update,
    Delete,
}

impl Lookup {
    /// 404 body message for an id that matched no row.
    pub fn not_found_message(self, resource: Resource) -> String {
        match self {
            Self::Get => format!("{} not found", resource.title()),
            Self::Update => format!("{} not found, no update performed", resource.title()),
            Self::Delete => format!("{} not found, no deletion performed", resource.title()),
        }
    }
}

/// Operations that answer with a success message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    pub fn success_message(self, resource: Resource) -> String {
        let verb = match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        };
        format!("{} {} successfully", resource.title(), verb)
    }
}
