//! Built-in knowledge base: puzzles, techniques, prompt themes and challenge templates.
//!
//! This is data, not behavior. `ContentStore::seeded()` validates and indexes it once at startup.

use crate::domain::{Category, ChallengeTemplate, Difficulty, PromptTemplate, Puzzle, Technique};

/// Theme every unknown theme resolves to.
pub const DEFAULT_THEME: &str = "innovation in everyday objects";

fn strs(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn puzzle(
  id: &str,
  category: Category,
  difficulty: Difficulty,
  question: &str,
  answer: &str,
  hints: &[&str],
  explanation: &str,
  thinking_approach: &str,
) -> Puzzle {
  Puzzle {
    id: id.into(),
    category,
    difficulty,
    question: question.into(),
    answer: answer.into(),
    hints: strs(hints),
    explanation: explanation.into(),
    thinking_approach: thinking_approach.into(),
  }
}

pub fn seed_puzzles() -> Vec<Puzzle> {
  vec![
    puzzle(
      "puzzle_001",
      Category::Situation,
      Difficulty::Easy,
      "A man walks into a bar and asks for a glass of water. The bartender pulls out a gun and points it at him. The man says 'Thank you' and walks out. Why?",
      "The man had hiccups, and the bartender scared them away by pointing the gun at him.",
      &[
        "The man didn't actually want water for drinking",
        "The bartender was trying to help the man",
        "Think about common remedies for a medical condition",
      ],
      "This classic puzzle requires you to think beyond the literal request. The water wasn't needed as a beverage but as a potential remedy for hiccups. The bartender offered an alternative solution by scaring the hiccups away.",
      "Question assumptions about what people really need versus what they ask for",
    ),
    puzzle(
      "puzzle_002",
      Category::Situation,
      Difficulty::Medium,
      "A man is found dead in a field with an unopened package beside him. There are no other clues. How did he die?",
      "His parachute failed to open. The package is the unopened parachute.",
      &[
        "The field is significant - why would someone be in the middle of a field?",
        "What kind of package would be unopened in this situation?",
        "Think about how someone might end up in a field unexpectedly",
      ],
      "The key is recognizing that the 'unopened package' is actually a failed parachute. The man was skydiving when his parachute malfunctioned.",
      "Consider unusual contexts that would explain ordinary objects",
    ),
    puzzle(
      "puzzle_003",
      Category::LogicTrick,
      Difficulty::Easy,
      "A doctor and a bus driver are both in love with the same woman. The bus driver had to go on a long trip that would last a week. Before he left, he gave the woman seven apples. Why?",
      "Because an apple a day keeps the doctor away!",
      &[
        "Think about common sayings",
        "Why would apples be relevant to a doctor?",
        "The bus driver wants to keep someone away",
      ],
      "This puzzle plays on the saying 'an apple a day keeps the doctor away.' The bus driver gave her seven apples (one for each day) to keep the doctor away while he was gone.",
      "Look for wordplay and common expressions",
    ),
    puzzle(
      "puzzle_004",
      Category::AssumptionChallenge,
      Difficulty::Medium,
      "A woman shoots her husband, then holds him underwater for five minutes. Next, she hangs him. Right after, they enjoy a lovely dinner together. How is this possible?",
      "She's a photographer. She shot a photo of him, developed it (held it underwater in developer solution), and hung it up to dry.",
      &[
        "Think about different meanings of common words",
        "What profession involves 'shooting,' 'developing,' and 'hanging'?",
        "Consider the process of creating something rather than harming someone",
      ],
      "This puzzle challenges the assumption that 'shoot' and 'hang' have violent meanings. In photography, these are standard technical terms.",
      "Question initial interpretations of words with multiple meanings",
    ),
    puzzle(
      "puzzle_005",
      Category::PerspectiveShift,
      Difficulty::Hard,
      "A man pushed his car to a hotel and lost his fortune. What happened?",
      "He was playing Monopoly. He landed on a hotel with his car token and didn't have enough money to pay the rent.",
      &[
        "This isn't about a real car or real hotel",
        "Think about games",
        "What game involves moving tokens to properties?",
      ],
      "The puzzle requires shifting perspective from real-world scenarios to board games. The 'car' is a game token, not a vehicle.",
      "Consider whether the scenario might exist in a different context entirely",
    ),
    puzzle(
      "puzzle_006",
      Category::Situation,
      Difficulty::Expert,
      "A man dies of thirst in his own home while there's water running from a tap in his kitchen. How is this possible?",
      "The man was a fish. His tank's water system failed, and while water was running from the kitchen tap, he couldn't access it.",
      &[
        "Challenge your assumption about what kind of 'man' this might be",
        "Different beings need water in different ways",
        "Think metaphorically about who lives in a 'home' and needs water to survive",
      ],
      "This puzzle requires you to question the fundamental assumption that 'man' refers to a human. In storytelling and fables, animals are often anthropomorphized.",
      "Question every assumption, even about the basic identity of actors in the scenario",
    ),
    puzzle(
      "puzzle_007",
      Category::Wordplay,
      Difficulty::Easy,
      "What occurs once in a minute, twice in a moment, but never in a thousand years?",
      "The letter 'M'",
      &[
        "Look at the words themselves",
        "Count specific elements in each word",
        "This is about spelling, not time",
      ],
      "The puzzle uses time words to misdirect you into thinking about temporal concepts when it's actually about the letters in the words themselves.",
      "Look at the literal components when dealing with word puzzles",
    ),
    puzzle(
      "puzzle_008",
      Category::Visual,
      Difficulty::Medium,
      "A truck driver is going down a one-way street the wrong way and passes at least ten cops. Why doesn't he get stopped?",
      "He's walking, not driving.",
      &[
        "Read the question very carefully",
        "What does 'truck driver' tell you about his current activity?",
        "Consider whether his profession means he's currently performing that job",
      ],
      "The puzzle leads you to assume the truck driver is driving, but it only states his profession, not his current activity.",
      "Distinguish between identity/profession and current action",
    ),
  ]
}

fn technique(name: &str, description: &str, when_to_use: &str, steps: &[&str], example: &str) -> Technique {
  Technique {
    name: name.into(),
    description: description.into(),
    when_to_use: when_to_use.into(),
    steps: strs(steps),
    example: example.into(),
  }
}

pub fn seed_techniques() -> Vec<Technique> {
  vec![
    technique(
      "Challenge Assumptions",
      "Identify and question the assumptions you're making about a problem. Often, the breakthrough comes when you realize an assumption was incorrect.",
      "When you feel stuck or when a problem seems impossible",
      &[
        "List all assumptions you're making about the problem",
        "For each assumption, ask 'Must this be true?'",
        "Try solving the problem with each assumption reversed",
        "Look for which reversed assumption makes the problem solvable",
      ],
      "Assuming a 'man' must be human when the puzzle could refer to any being",
    ),
    technique(
      "Reframe the Context",
      "Place the problem in a completely different context or domain to see if it makes more sense there.",
      "When the problem seems contradictory or impossible in its current context",
      &[
        "Identify the key elements of the problem",
        "Consider different contexts where these elements exist (games, professions, stories, etc.)",
        "Try retelling the problem in each new context",
        "See which context resolves the contradiction",
      ],
      "Realizing a puzzle about moving a car to a hotel makes sense in the context of Monopoly",
    ),
    technique(
      "Multiple Meaning Analysis",
      "Identify words that could have multiple meanings and explore each interpretation.",
      "When a puzzle uses common words that might have technical or alternative meanings",
      &[
        "Highlight key action words and nouns",
        "List alternative meanings for each word",
        "Consider professional/technical contexts for each word",
        "Reconstruct the scenario using alternative meanings",
      ],
      "'Shoot' could mean photograph, not harm; 'hang' could mean display, not execute",
    ),
    technique(
      "Reverse Engineering",
      "Start with the desired outcome and work backwards to find possible causes.",
      "When you know the end result but not how it came about",
      &[
        "Clearly state the end result or outcome",
        "Ask 'What could cause this result?'",
        "For each possible cause, ask 'What would need to be true?'",
        "Match your answers to the clues provided",
      ],
      "A man thanking someone who pointed a gun at him → must have helped him → how does fear help? → cures hiccups",
    ),
    technique(
      "Constraint Relaxation",
      "Temporarily remove or relax constraints to explore a wider solution space, then see which constraints can remain relaxed.",
      "When traditional approaches aren't working",
      &[
        "List all constraints you believe apply",
        "Temporarily remove each constraint one at a time",
        "Solve the problem without that constraint",
        "Determine if the constraint was actually necessary",
      ],
      "Removing the constraint that all actors must be human opens up solutions",
    ),
    technique(
      "Analogical Thinking",
      "Find similar problems in different domains and apply their solutions to your current problem.",
      "When you need fresh perspectives on a familiar problem type",
      &[
        "Abstract the core structure of your problem",
        "Search for similar structures in other domains",
        "Study how those domains solve the problem",
        "Adapt the solution back to your original problem",
      ],
      "Business strategy problems often have analogies in military strategy or competitive sports",
    ),
  ]
}

/// Themes drawn from when the caller supplies none. Not all of them have a dedicated template.
pub fn seed_themes() -> Vec<String> {
  strs(&[
    "innovation in everyday objects",
    "solving social problems",
    "future technology",
    "environmental challenges",
    "human connection",
    "education transformation",
    "urban design",
    "food systems",
  ])
}

/// Theme-keyed prompt templates, in catalogue order.
pub fn seed_prompts() -> Vec<(String, PromptTemplate)> {
  vec![
    (
      DEFAULT_THEME.into(),
      PromptTemplate {
        id: "prompt_001".into(),
        title: "Reimagine the Mundane".into(),
        prompt: "Choose an everyday object you use regularly. Now imagine it was designed by someone from a completely different culture or time period. How would it be different? What assumptions about its use would change?".into(),
        context: "This exercise helps you see familiar objects with fresh eyes by applying different cultural or historical perspectives.".into(),
        suggested_approaches: strs(&[
          "Pick an object (spoon, chair, door, etc.)",
          "Research how different cultures or time periods approached the same need",
          "Identify assumptions in current design",
          "Sketch or describe an alternative design",
          "Explain what problem the new design solves better",
        ]),
        example_response: Some("A chair designed by a nomadic culture might fold into a walking stick, serving dual purposes for people constantly on the move.".into()),
      },
    ),
    (
      "solving social problems".into(),
      PromptTemplate {
        id: "prompt_002".into(),
        title: "Flip the Problem".into(),
        prompt: "Think of a major social issue. Instead of asking 'How do we solve this?', ask 'What would make this problem worse?' Then work backwards.".into(),
        context: "Inversion thinking can reveal hidden factors and unexpected solutions by examining what you want to avoid.".into(),
        suggested_approaches: strs(&[
          "Identify a specific social problem",
          "List everything that would make it worse",
          "For each item, identify its opposite",
          "Look for surprising insights in the opposites",
          "Design solutions based on these insights",
        ]),
        example_response: Some("To reduce loneliness, instead of asking how to bring people together, ask what keeps them apart: fear of judgment, lack of shared interests, physical barriers. Solutions emerge from removing these obstacles.".into()),
      },
    ),
  ]
}

/// Difficulty-keyed brainstorming challenges. Only easy/medium/hard exist.
pub fn seed_challenges() -> Vec<(Difficulty, ChallengeTemplate)> {
  vec![
    (
      Difficulty::Easy,
      ChallengeTemplate {
        id: "challenge_easy_001".into(),
        challenge: "Design a new type of greeting that works across all cultures without words or gestures that could be misinterpreted.".into(),
        constraints: strs(&[
          "Must be universally understandable",
          "Cannot use words",
          "Must avoid gestures that are offensive in any culture",
          "Should convey friendliness and respect",
        ]),
        success_criteria: strs(&[
          "Can be performed by anyone regardless of physical ability",
          "Takes less than 3 seconds",
          "Clearly distinguishable from other common actions",
          "Feels natural and warm",
        ]),
        sample_solutions: strs(&[
          "A specific pattern of eye contact and smile",
          "Placing hand over heart and nodding",
          "A unique sound or musical tone",
        ]),
      },
    ),
    (
      Difficulty::Medium,
      ChallengeTemplate {
        id: "challenge_medium_001".into(),
        challenge: "Create a restaurant menu system that helps people make healthier choices without feeling restricted or judged.".into(),
        constraints: strs(&[
          "Cannot explicitly label foods as 'healthy' or 'unhealthy'",
          "Must maintain customer satisfaction",
          "Should work for diverse dietary needs",
          "Cannot significantly increase menu complexity",
        ]),
        success_criteria: strs(&[
          "Nudges toward nutritious options without forcing them",
          "Maintains appeal of all menu items",
          "Easy for staff to implement",
          "Customers report feeling good about their choices",
        ]),
        sample_solutions: strs(&[
          "Visual design that emphasizes certain sections",
          "Strategic ordering and placement of items",
          "Descriptive language that highlights positive attributes",
          "Bundling options that balance nutrition with indulgence",
        ]),
      },
    ),
    (
      Difficulty::Hard,
      ChallengeTemplate {
        id: "challenge_hard_001".into(),
        challenge: "Design a system for teaching critical thinking skills to people who are actively resistant to changing their beliefs.".into(),
        constraints: strs(&[
          "Cannot directly challenge existing beliefs",
          "Must respect individual autonomy",
          "Should work across different educational levels",
          "Needs to be engaging rather than preachy",
        ]),
        success_criteria: strs(&[
          "Participants voluntarily engage repeatedly",
          "Measurable improvement in reasoning skills",
          "Doesn't trigger defensive reactions",
          "Scales to large populations",
        ]),
        sample_solutions: strs(&[
          "Gamified scenarios in neutral domains",
          "Socratic questioning frameworks",
          "Collaborative problem-solving exercises",
          "Story-based learning with ambiguous situations",
        ]),
      },
    ),
  ]
}
