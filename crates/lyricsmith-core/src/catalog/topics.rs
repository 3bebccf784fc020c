use super::Category;

pub(super) const TOPIC_CATEGORIES: &[Category] = &[
    Category::new(
        "CORE CONCEPTS",
        &[
            "Ecological Dynamics",
            "Ecological Psychology",
            "Dynamical Systems Theory",
            "Growth Mindset",
        ],
    ),
    Category::new("DREAMS & PURPOSE", &["Dreams", "Hoop Dreams", "Temptation"]),
    Category::new(
        "LOVE & RELATIONSHIPS",
        &[
            "Love",
            "Lust",
            "Heartbreak",
            "Friendship",
            "Family",
            "Outgrowing Friendships",
        ],
    ),
    Category::new(
        "IDENTITY & SELF",
        &[
            "Living in the Moment",
            "Being True to Yourself",
            "Never Forgetting Where You Come From",
            "Your Past",
            "Your Future",
            "The 'Mask' We Wear",
            "Finding Home",
        ],
    ),
    Category::new(
        "STRUGGLE & GROWTH",
        &[
            "The Struggle",
            "Rags to Riches",
            "The Second Wind",
            "Growth",
            "Regret",
        ],
    ),
    Category::new(
        "BASKETBALL & SPORTS",
        &[
            "NBA Superstars (90s)",
            "NBA Superstars (00s)",
            "NBA Superstars (Today)",
            "WNBA Superstars (00s)",
            "WNBA Superstars (Today)",
            "Girl Power",
        ],
    ),
    Category::new("STREET LIFE & REALITY", &["Street Life", "The Jungle"]),
    Category::new(
        "PHILOSOPHY & WISDOM",
        &[
            "Mindfulness",
            "Zen Philosophy",
            "Zen Stillness",
            "Silence/Stillness",
            "Metaphors for Life",
            "The Wisdom in 'Foolish' Questions",
        ],
    ),
    Category::new(
        "TIME & LIFE LESSONS",
        &[
            "Time is the Only Currency",
            "The 'Auto-Pilot' Trap",
            "The Weight of 'What If?'",
            "Legacy",
            "Gratitude",
        ],
    ),
    Category::new(
        "FAMILY & FORGIVENESS",
        &[
            "Forgiving Your Parents",
            "Forgiving the Unapologetic",
            "Generational Trauma",
            "The Debt to Your Younger Self",
        ],
    ),
    Category::new(
        "MODERN LIFE",
        &[
            "Learning to Say 'No'",
            "The Right to Be Heard",
            "Digital Control",
            "Social Media vs. Reality",
            "Imposter Syndrome",
        ],
    ),
    Category::new(
        "SUCCESS & AMBITION",
        &["The Cost of Ambition", "Losing a Hero"],
    ),
    Category::new("NATURE & ANIMALS", &["Animals", "Reptiles", "Dogs", "Cats"]),
    Category::new("TRIBUTE & MEMORY", &["Autobiography", "Dedication (RIP)"]),
    Category::new("COMMUNICATION", &["Learning to Listen"]),
];

pub(super) const TOPICS: &[(&str, &str)] = &[
    (
        "Ecological Dynamics",
        "Skill emerges from the dance between a performer and their environment, not from rehearsed perfection.",
    ),
    (
        "Ecological Psychology",
        "We perceive the world as a field of possibilities for action; every surface is an invitation.",
    ),
    (
        "Dynamical Systems Theory",
        "Small changes ripple into new patterns; chaos settles into order and breaks apart again.",
    ),
    (
        "Growth Mindset",
        "Ability is built, not given; every failure is data on the way to mastery.",
    ),
    (
        "Dreams",
        "Chasing the vision nobody else can see, even when the world says wake up.",
    ),
    (
        "Hoop Dreams",
        "Cracked blacktop, a bent rim and the belief that the ball is the ticket out.",
    ),
    (
        "Temptation",
        "The easy road whispering while the right road stays steep and quiet.",
    ),
    (
        "Love",
        "The kind of devotion that changes how you see yourself and everything around you.",
    ),
    (
        "Lust",
        "Heat, impulse and the gap between wanting someone and knowing them.",
    ),
    (
        "Heartbreak",
        "Picking up the pieces after the person who felt like home walked out.",
    ),
    (
        "Friendship",
        "The ones who stayed through every season, no contracts and no conditions.",
    ),
    (
        "Family",
        "Blood, loyalty and the complicated love of the people who raised you.",
    ),
    (
        "Outgrowing Friendships",
        "Realizing the circle that built you can no longer hold who you are becoming.",
    ),
    (
        "Living in the Moment",
        "Putting the phone down and letting the present be enough.",
    ),
    (
        "Being True to Yourself",
        "Refusing to trade your voice for approval.",
    ),
    (
        "Never Forgetting Where You Come From",
        "Carrying the block, the struggle and the first believers into every new room.",
    ),
    (
        "Your Past",
        "Old scars, old addresses and the lessons they left behind.",
    ),
    (
        "Your Future",
        "A letter to the person you are working to become.",
    ),
    (
        "The 'Mask' We Wear",
        "The face shown to the world versus the one that comes out when the lights go off.",
    ),
    (
        "Finding Home",
        "Home as a feeling rather than a place, and the search to find it.",
    ),
    (
        "The Struggle",
        "Grinding through empty pockets, long nights and doubt that will not quit.",
    ),
    (
        "Rags to Riches",
        "From hand-me-downs to headlines without losing the hunger.",
    ),
    (
        "The Second Wind",
        "The moment after giving up where something inside refuses to stay down.",
    ),
    (
        "Growth",
        "Shedding old skin and celebrating the quiet progress nobody claps for.",
    ),
    (
        "Regret",
        "Words left unsaid and doors left closed, replayed at 3 AM.",
    ),
    (
        "NBA Superstars (90s)",
        "Baggy shorts, hand-checking, dynasties and the icons who ruled the hardwood.",
    ),
    (
        "NBA Superstars (00s)",
        "Crossovers, high-flyers and the rivalries that defined a generation of ballers.",
    ),
    (
        "NBA Superstars (Today)",
        "Logo threes, positionless basketball and superstars building empires.",
    ),
    (
        "WNBA Superstars (00s)",
        "The pioneers who built the league with grit before the spotlight arrived.",
    ),
    (
        "WNBA Superstars (Today)",
        "Sold-out arenas, record-breaking scorers and a league that demands respect.",
    ),
    (
        "Girl Power",
        "Confidence, sisterhood and owning every room you walk into.",
    ),
    (
        "Street Life",
        "Corners, code and consequences; survival told without glamour.",
    ),
    (
        "The Jungle",
        "The city as a wilderness where only the sharpest instincts survive.",
    ),
    (
        "Mindfulness",
        "Breath by breath, noticing the world without judging it.",
    ),
    (
        "Zen Philosophy",
        "Emptiness, impermanence and the beauty of letting go.",
    ),
    (
        "Zen Stillness",
        "A mind like still water reflecting everything and holding nothing.",
    ),
    (
        "Silence/Stillness",
        "What you hear when the noise finally stops.",
    ),
    (
        "Metaphors for Life",
        "Life as a chess match, a river, a marathon; images that make sense of the chaos.",
    ),
    (
        "The Wisdom in 'Foolish' Questions",
        "The child who asks why the sky is blue often sees further than the expert.",
    ),
    (
        "Time is the Only Currency",
        "Money comes back; minutes never do.",
    ),
    (
        "The 'Auto-Pilot' Trap",
        "Waking up years later and realizing you sleep-walked through your own life.",
    ),
    (
        "The Weight of 'What If?'",
        "The alternate lives that haunt every choice.",
    ),
    (
        "Legacy",
        "What remains when you are gone and who carries it forward.",
    ),
    (
        "Gratitude",
        "Counting blessings out loud, especially the small ones.",
    ),
    (
        "Forgiving Your Parents",
        "Seeing the people who raised you as flawed humans doing their best.",
    ),
    (
        "Forgiving the Unapologetic",
        "Releasing the weight even when the apology never comes.",
    ),
    (
        "Generational Trauma",
        "Breaking the cycle so the pain stops here.",
    ),
    (
        "The Debt to Your Younger Self",
        "Keeping the promises made by the kid you used to be.",
    ),
    (
        "Learning to Say 'No'",
        "Boundaries as self-respect rather than selfishness.",
    ),
    (
        "The Right to Be Heard",
        "Demanding space for voices that were told to stay quiet.",
    ),
    (
        "Digital Control",
        "Algorithms, screens and the fight to own your attention.",
    ),
    (
        "Social Media vs. Reality",
        "Filtered highlight reels against the unposted truth.",
    ),
    (
        "Imposter Syndrome",
        "Standing in rooms you earned while feeling like you snuck in.",
    ),
    (
        "The Cost of Ambition",
        "What the climb takes from you: sleep, friends, peace of mind.",
    ),
    (
        "Losing a Hero",
        "When the person you looked up to falls, or falls away.",
    ),
    (
        "Animals",
        "The wild kingdom as mirror and metaphor for human nature.",
    ),
    (
        "Reptiles",
        "Cold blood, patience and the ancient instinct to survive.",
    ),
    ("Dogs", "Loyalty without conditions and a love that waits by the door."),
    ("Cats", "Independence, mystery and affection that has to be earned."),
    (
        "Autobiography",
        "Your life story from the first memory to right now, told in your own words.",
    ),
    (
        "Dedication (RIP)",
        "A tribute to someone gone too soon; grief turned into celebration.",
    ),
    (
        "Learning to Listen",
        "Hearing to understand instead of waiting for your turn to talk.",
    ),
];
