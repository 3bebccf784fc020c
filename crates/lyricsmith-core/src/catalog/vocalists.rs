pub(super) const RAPPERS: &[(&str, &str)] = &[
    (
        "The Lyrical Technician",
        "[Vocals: Precise male rap, crisp enunciation] [Flow: Multisyllabic, internal rhymes, shifting cadence]",
    ),
    (
        "The Speed Demon",
        "[Vocals: Rapid-fire male rap, breath control] [Flow: Double-time, chopper, triplet bursts]",
    ),
    (
        "The Street Poet",
        "[Vocals: Gritty male baritone, raspy texture] [Flow: Laid-back, storytelling, conversational]",
    ),
    (
        "The Conscious Griot",
        "[Vocals: Warm male rap, spoken word influence] [Flow: Deliberate, message-driven, jazz cadence]",
    ),
    (
        "The Queen Bee",
        "[Vocals: Confident female rap, sharp diction] [Flow: Punchlines, switch-ups, commanding presence]",
    ),
    (
        "The Melodic Trapper",
        "[Vocals: Auto-tuned male rap-singing, airy falsetto] [Flow: Sing-song hooks, triplet flow, ad-lib heavy]",
    ),
    (
        "The Drill Commander",
        "[Vocals: Cold male rap, menacing low register] [Flow: Sliding drill cadence, staccato, aggressive]",
    ),
    (
        "The Southern Storyteller",
        "[Vocals: Drawling male rap, soulful grit] [Flow: Slow-rolling, syrupy bounce, vivid imagery]",
    ),
    (
        "The Battle MC",
        "[Vocals: Aggressive male rap, shouted emphasis] [Flow: Punchline-dense, call-and-response, confrontational]",
    ),
    (
        "The Abstract Wordsmith",
        "[Vocals: Nasal female rap, playful tone] [Flow: Off-beat, surreal wordplay, unpredictable pauses]",
    ),
];

pub(super) const SINGERS: &[(&str, &str)] = &[
    (
        "The Soul Belter",
        "[Vocals: Powerful female soul, gospel belting] [Technique: Melisma, sustained high notes, raw emotion]",
    ),
    (
        "The Velvet Crooner",
        "[Vocals: Smooth male R&B tenor, silky falsetto] [Technique: Runs, breathy delivery, intimate phrasing]",
    ),
    (
        "The Indie Whisperer",
        "[Vocals: Soft female indie vocals, breathy and close-mic] [Technique: Understated, airy, fragile phrasing]",
    ),
    (
        "The Rock Howler",
        "[Vocals: Raspy male rock vocals, gritty overdrive] [Technique: Screams, chest voice, anthemic choruses]",
    ),
    (
        "The Neo-Soul Dreamer",
        "[Vocals: Warm female neo-soul, jazzy timbre] [Technique: Behind-the-beat phrasing, scatting, layered harmonies]",
    ),
    (
        "The Pop Anthem Star",
        "[Vocals: Bright female pop vocals, polished] [Technique: Big hooks, stacked harmonies, key change climax]",
    ),
    (
        "The Country Heart",
        "[Vocals: Twangy male country baritone] [Technique: Storytelling phrasing, vocal cracks, heartfelt delivery]",
    ),
    (
        "The Gospel Choir Lead",
        "[Vocals: Commanding male gospel lead, choir backing] [Technique: Call-and-response, vamping, crescendos]",
    ),
];
