pub mod targets {
    pub const GRAMMAR: &str = "grammar";
    pub const BUILDER: &str = "builder";
}
