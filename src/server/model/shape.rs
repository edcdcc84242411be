//! Operation to output shape mapping.
//!
//! Resources that render differently per operation declare a `ShapeTable`. Handlers
//! resolve their shape once from the table and pass it to the domain model's
//! `into_repr`, so the mapping for every resource can be read in one place.

/// Operation being performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
}

/// Output representation of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Listing item: relations flattened to display values.
    Compact,
    /// Single-resource view: relations nested, derived fields included.
    Detail,
    /// Writable form: relations as ids.
    Full,
}

/// Shape used for each kind of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTable {
    pub list: Shape,
    pub retrieve: Shape,
    /// Create, update and anything else.
    pub other: Shape,
}

impl ShapeTable {
    pub const fn resolve(&self, action: Action) -> Shape {
        match action {
            Action::List => self.list,
            Action::Retrieve => self.retrieve,
            Action::Create | Action::Update => self.other,
        }
    }
}

pub const MOVIE_SHAPES: ShapeTable = ShapeTable {
    list: Shape::Compact,
    retrieve: Shape::Detail,
    other: Shape::Full,
};

pub const MOVIE_SESSION_SHAPES: ShapeTable = ShapeTable {
    list: Shape::Compact,
    retrieve: Shape::Detail,
    other: Shape::Full,
};

pub const ORDER_SHAPES: ShapeTable = ShapeTable {
    list: Shape::Detail,
    retrieve: Shape::Detail,
    other: Shape::Full,
};
