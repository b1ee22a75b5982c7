//! Built-in question deck (SDG 14: Life Below Water)

use super::question::{Difficulty, Question};

use Difficulty::{Easy, Hard, Medium};

/// The shipped 40-question catalog, in catalog order
pub fn builtin_questions() -> Vec<Question> {
    vec![
        // Easy - 10 points
        Question::with_default_points(
            "What is the main goal of SDG 14: Life Below Water?",
            [
                "Conserve and sustainably use the oceans and seas",
                "Increase fish production for food",
                "Promote tourism along every coastline",
                "Encourage offshore oil extraction",
            ],
            0,
            Easy,
        ),
        Question::with_default_points(
            "Which material makes up most of the litter found in the oceans?",
            ["Glass", "Plastic", "Metal", "Paper"],
            1,
            Easy,
        ),
        Question::with_default_points(
            "What causes coral 'bleaching'?",
            [
                "Too many fish in the area",
                "Shadows from passing boats",
                "Rising water temperature",
                "Lack of salt in the sea",
            ],
            2,
            Easy,
        ),
        Question::with_default_points(
            "Why do sea turtles often eat plastic bags?",
            [
                "Because they are colourful and eye-catching",
                "Because they like the taste of plastic",
                "Because they smell food on them",
                "Because they mistake them for jellyfish, their food",
            ],
            3,
            Easy,
        ),
        Question::with_default_points(
            "Roughly what share of the Earth's surface is covered by oceans?",
            ["About 70%", "About 50%", "About 90%", "About 30%"],
            0,
            Easy,
        ),
        Question::with_default_points(
            "Which coastal ecosystem is a 'nursery' for many marine species and protects the coast from erosion?",
            ["Rocky shores", "Mangroves", "Sand dunes", "Cliffs"],
            1,
            Easy,
        ),
        Question::with_default_points(
            "Where does most of the oxygen we breathe come from?",
            [
                "The Amazon rainforest",
                "Large soybean plantations",
                "Marine algae and phytoplankton",
                "Volcanic activity",
            ],
            2,
            Easy,
        ),
        Question::with_default_points(
            "What is 'overfishing'?",
            [
                "Catching only very large fish",
                "Using very fast fishing boats",
                "Fishing at night",
                "Catching fish faster than they can reproduce",
            ],
            3,
            Easy,
        ),
        Question::with_default_points(
            "Spills of which substance cause major environmental disasters, killing birds and fish?",
            ["Oil", "Sand", "Salt", "Sugar"],
            0,
            Easy,
        ),
        Question::with_default_points(
            "What is the main purpose of Marine Protected Areas (MPAs)?",
            [
                "Serve as routes for cargo ships",
                "Protect marine life and habitats",
                "Reserve space for water sports",
                "Test military equipment",
            ],
            1,
            Easy,
        ),
        // Medium - 25 points
        Question::with_default_points(
            "Which phenomenon, caused by oceans absorbing atmospheric CO2, harms shelled organisms?",
            ["Eutrophication", "Salinisation", "Acidification", "Thermocline"],
            2,
            Medium,
        ),
        Question::with_default_points(
            "What are 'microplastics'?",
            [
                "Small electronic devices dumped at sea",
                "Brands of biodegradable plastic",
                "Organisms that feed on plastic",
                "Plastic fragments smaller than 5mm",
            ],
            3,
            Medium,
        ),
        Question::with_default_points(
            "'Ghost fishing' refers to:",
            [
                "Lost fishing gear that keeps catching animals",
                "Fishing in places haunted by legends",
                "A kind of illegal night fishing",
                "Using glow-in-the-dark bait to attract fish",
            ],
            0,
            Medium,
        ),
        Question::with_default_points(
            "What is 'eutrophication', a common problem in coastal areas?",
            [
                "The water becomes clearer",
                "Excess nutrients causing algal blooms and oxygen loss",
                "A rise in average water temperature",
                "A drop in the water's salt content",
            ],
            1,
            Medium,
        ),
        Question::with_default_points(
            "Why are mangroves important for the environment?",
            [
                "They are protective barriers and species nurseries",
                "They are the main source of beach sand",
                "They increase wave strength on the coast",
                "They are ideal places to build ports",
            ],
            0,
            Medium,
        ),
        Question::with_default_points(
            "Which of these is an invasive species causing problems in the Atlantic, including Brazil?",
            ["Clownfish", "Lionfish", "Hammerhead shark", "Seahorse"],
            1,
            Medium,
        ),
        Question::with_default_points(
            "Ocean noise pollution from ships and sonar mainly affects which ability of whales and dolphins?",
            [
                "Their night vision",
                "Their sense of smell for finding food",
                "Their communication and navigation",
                "Their ability to float",
            ],
            2,
            Medium,
        ),
        Question::with_default_points(
            "What is 'blue carbon'?",
            [
                "A rare kind of blue coral",
                "Carbon pollution emitted by ships",
                "A fossil fuel found on the seabed",
                "Carbon captured and stored by coastal marine ecosystems",
            ],
            3,
            Medium,
        ),
        Question::with_default_points(
            "SDG target 14.1 focuses on reducing which problem by 2025?",
            [
                "The number of shipwrecks",
                "Marine pollution of all kinds, especially from land-based sources",
                "Noise from offshore wind turbines",
                "The amount of salt extracted for consumption",
            ],
            1,
            Medium,
        ),
        Question::with_default_points(
            "Why is melting glacier ice a threat to the oceans?",
            [
                "It increases the water's salinity",
                "It opens new shipping routes",
                "It raises sea level and alters ocean currents",
                "It reduces the number of fish",
            ],
            2,
            Medium,
        ),
        // Hard - 50 points
        Question::with_default_points(
            "The 'North Pacific Gyre' is an ocean area known for:",
            [
                "Having the warmest waters on the planet",
                "Being the largest whale migration route",
                "Hosting a huge accumulation of plastic litter",
                "Having the most active underwater volcanoes",
            ],
            2,
            Hard,
        ),
        Question::with_default_points(
            "UNCLOS defines the Exclusive Economic Zone (EEZ) as a belt extending up to:",
            [
                "500 nautical miles from the coast",
                "12 nautical miles from the coast",
                "50 nautical miles from the coast",
                "200 nautical miles from the coast",
            ],
            3,
            Hard,
        ),
        Question::with_default_points(
            "What is 'Maximum Sustainable Yield' (MSY) in fisheries management?",
            [
                "The largest catch that can be taken without depleting the stock",
                "The maximum legal profit for a fishing company",
                "The maximum weight a single fishing boat can carry",
                "The top speed allowed for fishing boats on the high seas",
            ],
            0,
            Hard,
        ),
        Question::with_default_points(
            "Which microscopic organism is the base of most of the marine food chain and produces oxygen?",
            ["Krill", "Phytoplankton", "Zooplankton", "Marine bacteria"],
            1,
            Hard,
        ),
        Question::with_default_points(
            "'Hypoxia', which creates ocean 'dead zones', is a condition of:",
            [
                "No sunlight on the seabed",
                "Water with extremely low oxygen levels",
                "Too much salt, making the water uninhabitable",
                "Water temperature below freezing",
            ],
            1,
            Hard,
        ),
        Question::with_default_points(
            "Which chemical reaction describes ocean acidification?",
            ["O2 + 2H2 -> 2H2O", "NaCl -> Na+ + Cl-", "CO2 + H2O -> H2CO3", "CaCO3 -> CaO + CO2"],
            2,
            Hard,
        ),
        Question::with_default_points(
            "The UN proclaimed 2021-2030 as the Decade of:",
            [
                "Marine Mineral Resource Exploration",
                "Seabird Protection",
                "Sustainable Shipping",
                "Ocean Science for Sustainable Development",
            ],
            3,
            Hard,
        ),
        Question::with_default_points(
            "'Biomagnification' is a dangerous process in which:",
            [
                "Toxins build up in higher concentrations along the food chain",
                "Marine organisms grow to abnormal sizes",
                "An area's biodiversity increases rapidly",
                "Salt accumulates inside an organism",
            ],
            0,
            Hard,
        ),
        Question::with_default_points(
            "Which fisheries subsidies does SDG target 14.6 seek to eliminate?",
            [
                "Fuel subsidies for small-scale fishers",
                "Subsidies that contribute to overfishing and illegal fishing",
                "Funding for marine life research",
                "Safety allowances for fishers",
            ],
            1,
            Hard,
        ),
        Question::with_default_points(
            "The 'thermocline' is an ocean layer with a rapid change in:",
            ["Salinity", "Pressure", "Temperature", "Visibility"],
            2,
            Hard,
        ),
        // Later additions
        Question::with_default_points(
            "What is the largest animal that has ever lived on Earth?",
            ["Tyrannosaurus rex", "African elephant", "Blue whale", "Megalodon shark"],
            2,
            Easy,
        ),
        Question::with_default_points(
            "How do fish breathe underwater?",
            [
                "By holding their breath for a long time",
                "Through gills",
                "Through their skin",
                "They don't need to breathe",
            ],
            1,
            Easy,
        ),
        Question::with_default_points(
            "What is a large group of fish swimming together called?",
            ["Herd", "School", "Pack", "Flock"],
            1,
            Easy,
        ),
        Question::with_default_points(
            "What causes the tides (the rise and fall of sea level)?",
            [
                "Strong wind",
                "The Earth's rotation",
                "Ocean currents",
                "The gravity of the Moon and the Sun",
            ],
            3,
            Easy,
        ),
        Question::with_default_points(
            "What is bioluminescence in marine animals?",
            [
                "A kind of camouflage",
                "The ability to produce their own light",
                "The ability to breathe out of water",
                "A sound used for communication",
            ],
            1,
            Medium,
        ),
        Question::with_default_points(
            "The Great Barrier Reef, the world's largest reef system, lies off the coast of which country?",
            ["Brazil", "South Africa", "Japan", "Australia"],
            3,
            Medium,
        ),
        Question::with_default_points(
            "What is the process in which ocean water evaporates, forms clouds and falls back as rain?",
            ["Photosynthesis", "Water cycle", "Greenhouse effect", "Erosion"],
            1,
            Medium,
        ),
        Question::with_default_points(
            "What is the deepest known point in the Earth's oceans?",
            ["Mariana Trench", "Tonga Trench", "Japan Trench", "Challenger Abyss"],
            0,
            Hard,
        ),
        Question::with_default_points(
            "In fishing, what does 'bycatch' mean?",
            [
                "Catching more than allowed",
                "Using illegal fishing nets",
                "Marine animals caught unintentionally",
                "A rare kind of fish",
            ],
            2,
            Hard,
        ),
        Question::with_default_points(
            "Which international convention is the main agreement for preventing marine pollution from ships?",
            [
                "Stockholm Convention",
                "Kyoto Protocol",
                "Paris Agreement",
                "MARPOL Convention",
            ],
            3,
            Hard,
        ),
    ]
}
