/// Identity of every model shipped by the library.
///
/// Each variant pairs a display name with a stable numeric ID. The
/// one-parameter family occupies the 100 block and the two-parameter family
/// the 200 block, leaving room for larger families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Henry,
    DubininRadushkevich,
    Elovich,
    Freundlich,
    HarkinJura,
    Halsey,
    Jovanovic,
    Langmuir,
    Temkin,
}

impl ModelKind {
    /// Every model kind, in registry order.
    pub const ALL: [ModelKind; 9] = [
        ModelKind::Henry,
        ModelKind::DubininRadushkevich,
        ModelKind::Elovich,
        ModelKind::Freundlich,
        ModelKind::HarkinJura,
        ModelKind::Halsey,
        ModelKind::Jovanovic,
        ModelKind::Langmuir,
        ModelKind::Temkin,
    ];

    /// The model's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ModelKind::Henry => "Henry",
            ModelKind::DubininRadushkevich => "DubininRadushkevich",
            ModelKind::Elovich => "Elovich",
            ModelKind::Freundlich => "Freundlich",
            ModelKind::HarkinJura => "HarkinJura",
            ModelKind::Halsey => "Halsey",
            ModelKind::Jovanovic => "Jovanovic",
            ModelKind::Langmuir => "Langmuir",
            ModelKind::Temkin => "Temkin",
        }
    }

    /// The model's stable numeric ID.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            ModelKind::Henry => 100,
            ModelKind::DubininRadushkevich => 200,
            ModelKind::Elovich => 201,
            ModelKind::Freundlich => 202,
            ModelKind::HarkinJura => 203,
            ModelKind::Halsey => 204,
            ModelKind::Jovanovic => 205,
            ModelKind::Langmuir => 206,
            ModelKind::Temkin => 207,
        }
    }
}
