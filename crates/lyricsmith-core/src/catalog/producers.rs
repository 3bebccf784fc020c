pub(super) const PRODUCERS: &[(&str, &str)] = &[
    (
        "The Boom Bap Purist",
        "[Production: Boom Bap, Dusty Drums, Chopped Jazz Samples] [Mood: Nostalgic, Gritty]",
    ),
    (
        "The Lo-Fi Alchemist",
        "[Production: Lo-Fi, Vinyl Crackle, Mellow Keys] [Mood: Chill, Late Night]",
    ),
    (
        "The Trap Architect",
        "[Production: Trap, Rolling Hi-Hats, 808 Bass] [Mood: Dark, Hard-Hitting]",
    ),
    (
        "The Drill Engineer",
        "[Production: UK Drill, Sliding 808s, Syncopated Snares] [Mood: Menacing, Cold]",
    ),
    (
        "The Soul Sampler",
        "[Production: Soul Samples, Pitched Vocals, Warm Bass] [Mood: Uplifting, Triumphant]",
    ),
    (
        "The Cinematic Composer",
        "[Production: Orchestral Strings, Epic Brass, Choir] [Mood: Cinematic, Grand]",
    ),
    (
        "The Synthwave Pilot",
        "[Production: Synthwave, Analog Synths, Gated Reverb Drums] [Mood: Retro, Neon Night Drive]",
    ),
    (
        "The G-Funk Cruiser",
        "[Production: G-Funk, Whining Synth Leads, Talkbox] [Mood: Sunny, West Coast Bounce]",
    ),
    (
        "The Afrobeats Maestro",
        "[Production: Afrobeats, Log Drums, Syncopated Percussion] [Mood: Danceable, Joyful]",
    ),
    (
        "The Acoustic Minimalist",
        "[Production: Acoustic Guitar, Sparse Piano, Room Ambience] [Mood: Intimate, Raw]",
    ),
    (
        "The Jazz Lounge Curator",
        "[Production: Live Jazz Trio, Upright Bass, Brushed Drums] [Mood: Smoky, Sophisticated]",
    ),
    (
        "The Rock Arena Builder",
        "[Production: Distorted Guitars, Stadium Drums, Power Chords] [Mood: Anthemic, Rebellious]",
    ),
];
