use super::Category;

pub(super) const RHYME_SCHEME_CATEGORIES: &[Category] = &[
    Category::new(
        "TIER 1: BASICS",
        &[
            "The Nursery Rhyme (AABB)",
            "The Standard (ABAB)",
            "The Sandwich (ABBA)",
        ],
    ),
    Category::new(
        "TIER 2: TECHNICIAN",
        &[
            "The Inception (Internal)",
            "The Baton Pass (Chain)",
            "The Machine Gun (Mono-Rhyme)",
        ],
    ),
    Category::new(
        "TIER 3: GOD MODE",
        &["The Big Pun (Multis)", "The Bender (Broken Rhyme)"],
    ),
    Category::new(
        "TIER 4: THE ARCHITECT",
        &[
            "The Jigsaw (Mosaic)",
            "The Bookends (Framed)",
            "The Countdown (Climbing)",
        ],
    ),
    Category::new(
        "TIER 5: ABSTRACT",
        &[
            "The Doppelgänger (Holorime)",
            "The Jay-Z Pivot (Antanaclasis)",
            "The Spillover (Across-the-Bar)",
        ],
    ),
    Category::new(
        "TIER 6: HIGH CONCEPT",
        &[
            "The Count (Numerical Progression)",
            "The Rewind (Reverse Chronology)",
            "The Possessed (Object POV)",
            "The ABCs (Alphabet Aerobics)",
            "The Hammer (Anaphora)",
            "The Missing Link (No 'I' or 'Me')",
        ],
    ),
    Category::new("ABSTRACT", &["The Jazz Poet (Free Verse)"]),
];

pub(super) const RHYME_SCHEMES: &[(&str, &str)] = &[
    (
        "The Nursery Rhyme (AABB)",
        "[Rhyme Scheme: AABB couplets] [Technique: Consecutive lines rhyme in pairs]",
    ),
    (
        "The Standard (ABAB)",
        "[Rhyme Scheme: ABAB alternating] [Technique: Every other line rhymes]",
    ),
    (
        "The Sandwich (ABBA)",
        "[Rhyme Scheme: ABBA enclosed] [Technique: Outer lines rhyme around an inner couplet]",
    ),
    (
        "The Inception (Internal)",
        "[Rhyme Scheme: Internal rhymes] [Technique: Rhymes hidden inside the line, not just at the end]",
    ),
    (
        "The Baton Pass (Chain)",
        "[Rhyme Scheme: Chain rhyme] [Technique: The last word of one line sets the rhyme for the next]",
    ),
    (
        "The Machine Gun (Mono-Rhyme)",
        "[Rhyme Scheme: Mono-rhyme] [Technique: Every line ends on the same sound]",
    ),
    (
        "The Big Pun (Multis)",
        "[Rhyme Scheme: Multisyllabic] [Technique: Rhyme three or more syllables in a row]",
    ),
    (
        "The Bender (Broken Rhyme)",
        "[Rhyme Scheme: Broken rhyme] [Technique: Split or bend words across the line to force a rhyme]",
    ),
    (
        "The Jigsaw (Mosaic)",
        "[Rhyme Scheme: Mosaic rhyme] [Technique: Several words together rhyme with one longer word]",
    ),
    (
        "The Bookends (Framed)",
        "[Rhyme Scheme: Framed rhyme] [Technique: The first and last words of each bar rhyme]",
    ),
    (
        "The Countdown (Climbing)",
        "[Rhyme Scheme: Climbing rhyme] [Technique: Each bar adds one more rhyming syllable]",
    ),
    (
        "The Doppelgänger (Holorime)",
        "[Rhyme Scheme: Holorime] [Technique: Two whole lines that sound alike with different meanings]",
    ),
    (
        "The Jay-Z Pivot (Antanaclasis)",
        "[Rhyme Scheme: Antanaclasis] [Technique: Repeat one word with a new meaning each time]",
    ),
    (
        "The Spillover (Across-the-Bar)",
        "[Rhyme Scheme: Enjambed rhyme] [Technique: Rhymes land mid-line after spilling across the bar]",
    ),
    (
        "The Count (Numerical Progression)",
        "[Rhyme Scheme: Numerical progression] [Technique: Each bar counts up from one to ten]",
    ),
    (
        "The Rewind (Reverse Chronology)",
        "[Rhyme Scheme: Reverse chronology] [Technique: The story is told from the ending back to the start]",
    ),
    (
        "The Possessed (Object POV)",
        "[Rhyme Scheme: Object point of view] [Technique: Narrated by an object, such as a gun or a basketball]",
    ),
    (
        "The ABCs (Alphabet Aerobics)",
        "[Rhyme Scheme: Alphabet aerobics] [Technique: Each bar starts with the next letter of the alphabet]",
    ),
    (
        "The Hammer (Anaphora)",
        "[Rhyme Scheme: Anaphora] [Technique: Every bar opens with the same phrase]",
    ),
    (
        "The Missing Link (No 'I' or 'Me')",
        "[Rhyme Scheme: Lipogram] [Technique: Never use the words I or me]",
    ),
    (
        "The Jazz Poet (Free Verse)",
        "[Rhyme Scheme: Free verse] [Technique: Rhythm over rhyme, loose and improvised like a jazz solo]",
    ),
];
