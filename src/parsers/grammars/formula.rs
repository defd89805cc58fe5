use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parsers/grammars/formula.pest"]
pub struct FormulaPestParser;
