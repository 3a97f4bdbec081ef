//! Graph command

use crate::domain::workflow::graph;

pub fn run() {
    println!("{}", graph::mermaid());
}
