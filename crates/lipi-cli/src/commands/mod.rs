pub mod accuracy_ops;
pub mod config_ops;
pub mod convert_ops;
pub mod corpus_ops;
pub mod guide_ops;
