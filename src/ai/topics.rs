//! The fixed list of IB Biology HL syllabus sections (first assessment
//! 2025) offered by the topic picker and listed in the tutor persona.

/// Selecting nothing in the topic picker submits this label.
pub const NO_TOPIC: &str = "";

pub const TOPICS: [&str; 40] = [
    "A1.1 Water",
    "A1.2 Nucleic acids",
    "A2.1 Origins of cells [HL]",
    "A2.2 Cell structure",
    "A2.3 Viruses [HL]",
    "A3.1 Diversity of organisms",
    "A3.2 Classification and cladistics [HL]",
    "A4.1 Evolution and speciation",
    "A4.2 Conservation of biodiversity",
    "B1.1 Carbohydrates and lipids",
    "B1.2 Proteins",
    "B2.1 Membranes and membrane transport",
    "B2.2 Organelles and compartmentalization",
    "B2.3 Cell specialization",
    "B3.1 Gas exchange",
    "B3.2 Transport",
    "B3.3 Muscle and motility [HL]",
    "B4.1 Adaptation to environment",
    "B4.2 Ecological niches",
    "C1.1 Enzymes and metabolism",
    "C1.2 Cell respiration",
    "C1.3 Photosynthesis",
    "C2.1 Chemical signaling",
    "C2.2 Neural signaling",
    "C3.1 Integration of body systems",
    "C3.2 Defense against disease",
    "C4.1 Populations and communities",
    "C4.2 Transfers of energy and matter",
    "D1.1 DNA replication",
    "D1.2 Protein synthesis",
    "D1.3 Mutation and gene editing",
    "D2.1 Cell and nuclear division",
    "D2.2 Gene expression [HL]",
    "D2.3 Water potential",
    "D3.1 Reproduction",
    "D3.2 Inheritance",
    "D3.3 Homeostasis",
    "D4.1 Natural selection",
    "D4.2 Stability and change",
    "D4.3 Climate change",
];

pub fn is_topic(label: &str) -> bool {
    TOPICS.contains(&label)
}

/// Resolves picker input to a topic label. Accepts the exact label, a
/// 1-based position in the list, or a section code such as `C1.3`.
pub fn resolve(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if let Some(label) = TOPICS.iter().find(|t| **t == input) {
        return Some(label);
    }
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| TOPICS.get(i)).copied();
    }
    TOPICS
        .iter()
        .find(|t| {
            t.split_once(' ')
                .is_some_and(|(code, _)| code.eq_ignore_ascii_case(input))
        })
        .copied()
}
