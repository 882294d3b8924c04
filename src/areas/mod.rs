pub mod ignore;
pub mod project;
pub mod workspace;
