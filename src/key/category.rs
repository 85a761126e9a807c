use std::fmt::{self, Display, Formatter};

/// The category of a key, used when describing and debugging keys
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum Category {
	/// crate::key::root::kv                 /{kv}
	Root,
	/// crate::key::root::ns                 /{kv}!n{ns}
	Namespace,
	/// crate::key::namespace::all           /{kv}*{ns}
	NamespaceRoot,
	/// crate::key::namespace::db            /{kv}*{ns}!d{db}
	Database,
	/// crate::key::namespace::tk            /{kv}*{ns}!k{tk}
	NamespaceToken,
	/// crate::key::namespace::us            /{kv}*{ns}!u{us}
	NamespaceLogin,
	/// crate::key::database::all            /{kv}*{ns}*{db}
	DatabaseRoot,
	/// crate::key::database::sc             /{kv}*{ns}*{db}!s{sc}
	Scope,
	/// crate::key::scope::tk                /{kv}*{ns}*{db}!st{sc}!k{tk}
	ScopeToken,
	/// crate::key::database::tb             /{kv}*{ns}*{db}!t{tb}
	Table,
	/// crate::key::database::tk             /{kv}*{ns}*{db}!k{tk}
	DatabaseToken,
	/// crate::key::database::us             /{kv}*{ns}*{db}!u{us}
	DatabaseLogin,
	/// crate::key::table::all               /{kv}*{ns}*{db}*{tb}
	TableRoot,
	/// crate::key::table::ev                /{kv}*{ns}*{db}*{tb}!e{ev}
	TableEvent,
	/// crate::key::table::fd                /{kv}*{ns}*{db}*{tb}!f{fd}
	TableField,
	/// crate::key::table::ix                /{kv}*{ns}*{db}*{tb}!i{ix}
	IndexDefinition,
	/// crate::key::table::lv                /{kv}*{ns}*{db}*{tb}!l{lv}
	TableLiveQuery,
	/// crate::key::table::ft                /{kv}*{ns}*{db}*{tb}!t{ft}
	TableView,
	/// crate::key::thing                    /{kv}*{ns}*{db}*{tb}*{id}
	Thing,
	/// crate::key::field                    /{kv}*{ns}*{db}*{tb}*{id}*{fd}
	RecordField,
	/// crate::key::edge                     /{kv}*{ns}*{db}*{tb}*{id}{tk}{tp}{ft}{fk}
	Edge,
	/// crate::key::patch                    /{kv}*{ns}*{db}*{tb}~{id}{at}
	Patch,
	/// crate::key::index                    /{kv}*{ns}*{db}*{tb}¤{ix}{fd}
	Index,
	/// crate::key::point                    /{kv}*{ns}*{db}*{tb}¤{ix}{fd}{id}
	IndexPoint,
}

/// Returns the category of a key for display and debugging
pub trait Categorise {
	fn categorise(&self) -> Category;
}

impl Display for Category {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let name = match self {
			Category::Root => "Root",
			Category::Namespace => "Namespace",
			Category::NamespaceRoot => "NamespaceRoot",
			Category::Database => "Database",
			Category::NamespaceToken => "NamespaceToken",
			Category::NamespaceLogin => "NamespaceLogin",
			Category::DatabaseRoot => "DatabaseRoot",
			Category::Scope => "Scope",
			Category::ScopeToken => "ScopeToken",
			Category::Table => "Table",
			Category::DatabaseToken => "DatabaseToken",
			Category::DatabaseLogin => "DatabaseLogin",
			Category::TableRoot => "TableRoot",
			Category::TableEvent => "TableEvent",
			Category::TableField => "TableField",
			Category::IndexDefinition => "IndexDefinition",
			Category::TableLiveQuery => "TableLiveQuery",
			Category::TableView => "TableView",
			Category::Thing => "Thing",
			Category::RecordField => "RecordField",
			Category::Edge => "Edge",
			Category::Patch => "Patch",
			Category::Index => "Index",
			Category::IndexPoint => "IndexPoint",
		};
		write!(f, "{}", name)
	}
}
