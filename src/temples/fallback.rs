use super::TempleRecord;

/// Curated records for the trawell.in Tamil Nadu pilgrimages page, used when the live
/// page yields no qualifying headings.
pub const TRAWELL_TAMIL_NADU: &[(&str, &str)] = &[
    (
        "Meenakshi Amman Temple",
        "A historic temple on the southern bank of the Vaigai river in Madurai, dedicated to \
         Meenakshi and her consort Sundareswarar. Its fourteen gopurams are covered in brightly \
         painted sculptures and the complex houses the Hall of Thousand Pillars.",
    ),
    (
        "Brihadeeswarar Temple",
        "Built by Raja Raja Chola I in Thanjavur and completed in 1010 CE, this Shiva temple is \
         part of the Great Living Chola Temples UNESCO site. Its vimana is among the tallest in \
         the world and carries a granite capstone.",
    ),
    (
        "Ramanathaswamy Temple",
        "A Shiva temple on Rameswaram island and one of the twelve Jyotirlinga shrines. It is \
         known for the longest temple corridor in India and twenty-two sacred wells inside the \
         complex.",
    ),
    (
        "Arunachaleswarar Temple",
        "Located at the foot of Annamalai hill in Tiruvannamalai, the temple represents the fire \
         element among the Pancha Bhoota Sthalams. Pilgrims walk the Girivalam path around the \
         hill on full moon nights.",
    ),
    (
        "Kapaleeshwarar Temple",
        "A Dravidian style Shiva temple in Mylapore, Chennai, built in the seventh century by \
         the Pallavas. The temple tank and the colourful gopuram are landmarks of the \
         neighbourhood.",
    ),
    (
        "Nataraja Temple",
        "The Thillai Nataraja temple in Chidambaram is dedicated to Shiva as the cosmic dancer. \
         It represents the ether element and its golden roofed sanctum is a major site of \
         Saivite worship.",
    ),
    (
        "Ekambareswarar Temple",
        "One of the largest temples in Kanchipuram, representing the earth element. A mango \
         tree said to be over three thousand years old stands in the inner courtyard.",
    ),
    (
        "Sri Ranganathaswamy Temple",
        "Situated on an island in the Kaveri river at Srirangam, this is one of the largest \
         functioning Hindu temple complexes in the world and the foremost of the 108 Divya \
         Desams dedicated to Vishnu.",
    ),
    (
        "Kumari Amman Temple",
        "A shrine at the southern tip of India in Kanyakumari, dedicated to the goddess \
         Kanya Kumari. The temple faces the confluence of the Arabian Sea, the Bay of Bengal \
         and the Indian Ocean.",
    ),
    (
        "Palani Murugan Temple",
        "The Arulmigu Dhandayuthapani Swamy temple sits atop Sivagiri hill in Palani and is one \
         of the six abodes of Murugan. Pilgrims climb the steps or take the winch and rope car \
         to the summit.",
    ),
    (
        "Shore Temple",
        "A structural granite temple overlooking the Bay of Bengal at Mamallapuram, built in \
         the eighth century under the Pallava dynasty and listed as a UNESCO World Heritage \
         Site.",
    ),
];

pub fn records(table: &[(&str, &str)]) -> Vec<TempleRecord> {
    table
        .iter()
        .map(|(name, description)| TempleRecord::new(*name, *description))
        .collect()
}

// ── Tests ──
