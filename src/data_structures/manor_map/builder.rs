//! Construction of the fixed manor topology.
//!
//! The map is a compiled-in constant of this version: seven rooms arranged as
//! a complete binary tree of depth two, some of them seeded with a clue and
//! the suspect it implicates. The map is built once at session start and never
//! mutated afterwards.

use super::node::Room;

/// Builds the fixed manor map and returns its root room.
///
/// Layout:
///
/// ```text
///              Hall de Entrada
///              /             \
///        Biblioteca         Cozinha
///         /      \          /     \
///   Escritorio  Quarto   Sotao   Jardim
/// ```
///
/// Allocation failure while building the map is fatal; the process aborts.
pub fn build_manor() -> Room {
    let mut hall = Room::new("Hall de Entrada");

    let mut biblioteca = Room::new("Biblioteca")
        .with_clue("marcas de poeira no chão")
        .with_suspect("Sra. White");
    let mut cozinha = Room::new("Cozinha")
        .with_clue("faca ausente do suporte")
        .with_suspect("Sr. Black");

    let escritorio = Room::new("Escritorio")
        .with_clue("documento rasgado")
        .with_suspect("Sr. Black");
    let quarto = Room::new("Quarto")
        .with_clue("relógio parado 02:15")
        .with_suspect("Sra. White");
    let sotao = Room::new("Sotao")
        .with_clue("chave antiga enferrujada")
        .with_suspect("Sr. Black");
    let jardim = Room::new("Jardim")
        .with_clue("luva de couro")
        .with_suspect("Sr. Black");

    biblioteca.connect(Some(escritorio), Some(quarto));
    cozinha.connect(Some(sotao), Some(jardim));
    hall.connect(Some(biblioteca), Some(cozinha));

    hall
}
