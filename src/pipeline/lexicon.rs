//! Built-in emotion lexicon.
//!
//! A compact word-association list in the style of the NRC emotion lexicon:
//! each entry maps one lower-case token to the categories it counts toward.
//! The list skews toward vocabulary common in job advertisements. It is
//! compiled in and read-only; scoring fidelity depends on the exact
//! associations, so entries are not deduplicated against "better" lexicons.

use crate::core::Emotion::{self, *};

pub(super) static LEXICON: &[(&str, &[Emotion])] = &[
    ("abandon", &[Fear, Negative, Sadness]),
    ("ability", &[Positive]),
    ("accomplish", &[Joy, Positive]),
    ("accountable", &[Trust, Positive]),
    ("achieve", &[Joy, Positive]),
    ("achievement", &[Anticipation, Joy, Positive, Trust]),
    ("admire", &[Joy, Positive, Trust]),
    ("adventure", &[Anticipation, Positive]),
    ("aggressive", &[Anger, Fear, Negative]),
    ("ambition", &[Anticipation, Positive]),
    ("ambitious", &[Anticipation, Positive]),
    ("angry", &[Anger, Disgust, Negative]),
    ("anxious", &[Anticipation, Fear, Negative]),
    ("attack", &[Anger, Fear, Negative]),
    ("award", &[Anticipation, Joy, Positive, Trust]),
    ("bad", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("balance", &[Positive]),
    ("benefit", &[Positive]),
    ("bonus", &[Anticipation, Joy, Positive, Surprise]),
    ("boring", &[Negative]),
    ("build", &[Positive]),
    ("burden", &[Fear, Negative, Sadness]),
    ("burnout", &[Negative, Sadness]),
    ("career", &[Anticipation, Positive]),
    ("celebrate", &[Joy, Positive, Surprise]),
    ("challenge", &[Anger, Fear, Negative]),
    ("challenging", &[Anticipation, Fear]),
    ("chaos", &[Fear, Negative]),
    ("collaborate", &[Positive, Trust]),
    ("collaborative", &[Positive, Trust]),
    ("commit", &[Positive, Trust]),
    ("committed", &[Positive, Trust]),
    ("competitive", &[Anticipation]),
    ("confident", &[Joy, Positive, Trust]),
    ("conflict", &[Anger, Fear, Negative, Sadness]),
    ("crisis", &[Fear, Negative, Sadness]),
    ("critical", &[Negative]),
    ("culture", &[Positive]),
    ("cutting", &[Negative]),
    ("deadline", &[Anticipation, Fear]),
    ("delight", &[Joy, Positive]),
    ("demanding", &[Negative]),
    ("dependable", &[Positive, Trust]),
    ("develop", &[Anticipation, Positive]),
    ("difficult", &[Fear, Negative]),
    ("disaster", &[Fear, Negative, Sadness, Surprise]),
    ("discipline", &[Fear, Negative]),
    ("dismiss", &[Negative, Sadness]),
    ("disrupt", &[Negative, Surprise]),
    ("diverse", &[Positive]),
    ("dream", &[Anticipation, Joy, Positive]),
    ("drive", &[Anticipation, Positive]),
    ("dynamic", &[Positive, Surprise]),
    ("eager", &[Anticipation, Positive]),
    ("effective", &[Positive, Trust]),
    ("efficient", &[Positive]),
    ("empower", &[Positive, Trust]),
    ("energetic", &[Joy, Positive]),
    ("energy", &[Positive]),
    ("engage", &[Anticipation, Positive]),
    ("enjoy", &[Anticipation, Joy, Positive, Trust]),
    ("enthusiasm", &[Anticipation, Joy, Positive, Surprise]),
    ("enthusiastic", &[Anticipation, Joy, Positive]),
    ("excel", &[Joy, Positive]),
    ("excellence", &[Joy, Positive, Trust]),
    ("excellent", &[Joy, Positive, Trust]),
    ("excited", &[Anticipation, Joy, Positive, Surprise]),
    ("exciting", &[Anticipation, Joy, Positive, Surprise]),
    ("expert", &[Positive, Trust]),
    ("fail", &[Fear, Negative, Sadness]),
    ("failure", &[Disgust, Fear, Negative, Sadness]),
    ("fair", &[Positive, Trust]),
    ("fast", &[Anticipation]),
    ("fear", &[Fear, Negative]),
    ("fire", &[Fear, Negative]),
    ("flexible", &[Positive]),
    ("friendly", &[Joy, Positive, Trust]),
    ("frustration", &[Anger, Negative]),
    ("fun", &[Anticipation, Joy, Positive]),
    ("generous", &[Joy, Positive, Trust]),
    ("goal", &[Anticipation, Positive]),
    ("good", &[Joy, Positive, Surprise, Trust]),
    ("great", &[Joy, Positive]),
    ("grow", &[Anticipation, Joy, Positive, Trust]),
    ("growth", &[Anticipation, Positive]),
    ("happy", &[Anticipation, Joy, Positive, Trust]),
    ("hazard", &[Fear, Negative]),
    ("help", &[Positive, Trust]),
    ("hire", &[Anticipation, Joy, Positive, Trust]),
    ("honest", &[Positive, Trust]),
    ("hope", &[Anticipation, Joy, Positive, Trust]),
    ("hostile", &[Anger, Disgust, Fear, Negative]),
    ("impact", &[Positive]),
    ("important", &[Positive, Trust]),
    ("improve", &[Anticipation, Joy, Positive, Trust]),
    ("innovate", &[Anticipation, Positive, Surprise]),
    ("innovative", &[Positive, Surprise]),
    ("inspire", &[Anticipation, Joy, Positive, Trust]),
    ("integrity", &[Positive, Trust]),
    ("intense", &[Negative]),
    ("journey", &[Anticipation, Positive]),
    ("joy", &[Joy, Positive]),
    ("lead", &[Positive, Trust]),
    ("leader", &[Positive, Trust]),
    ("leadership", &[Positive, Trust]),
    ("learn", &[Anticipation, Positive]),
    ("lose", &[Anger, Fear, Negative, Sadness]),
    ("loss", &[Fear, Negative, Sadness]),
    ("love", &[Joy, Positive]),
    ("loyal", &[Positive, Trust]),
    ("mandatory", &[Negative]),
    ("mentor", &[Positive, Trust]),
    ("mission", &[Anticipation, Positive]),
    ("motivated", &[Anticipation, Positive]),
    ("obstacle", &[Fear, Negative]),
    ("opportunity", &[Anticipation, Positive]),
    ("overtime", &[Negative, Sadness]),
    ("passion", &[Anticipation, Joy, Positive]),
    ("passionate", &[Anticipation, Joy, Positive]),
    ("penalty", &[Anger, Fear, Negative, Sadness]),
    ("perfect", &[Anticipation, Joy, Positive, Trust]),
    ("pressure", &[Negative]),
    ("problem", &[Fear, Negative, Sadness]),
    ("professional", &[Positive, Trust]),
    ("progress", &[Anticipation, Joy, Positive]),
    ("proud", &[Joy, Positive, Trust]),
    ("proven", &[Positive, Trust]),
    ("quality", &[Positive, Trust]),
    ("reject", &[Anger, Fear, Negative, Sadness]),
    ("reliable", &[Positive, Trust]),
    ("resign", &[Fear, Negative, Sadness]),
    ("respect", &[Joy, Positive, Trust]),
    ("responsible", &[Positive, Trust]),
    ("reward", &[Anticipation, Joy, Positive, Surprise, Trust]),
    ("rewarding", &[Joy, Positive]),
    ("risk", &[Anticipation, Fear, Negative]),
    ("salary", &[Anticipation, Joy, Positive, Trust]),
    ("satisfaction", &[Joy, Positive]),
    ("secure", &[Joy, Positive, Trust]),
    ("security", &[Positive, Trust]),
    ("smart", &[Positive]),
    ("strength", &[Positive, Trust]),
    ("stress", &[Fear, Negative]),
    ("stressful", &[Fear, Negative]),
    ("strict", &[Negative]),
    ("strong", &[Positive, Trust]),
    ("succeed", &[Anticipation, Joy, Positive]),
    ("success", &[Anticipation, Joy, Positive]),
    ("successful", &[Anticipation, Joy, Positive, Trust]),
    ("support", &[Positive, Trust]),
    ("supportive", &[Positive, Trust]),
    ("surprise", &[Surprise]),
    ("talent", &[Positive]),
    ("team", &[Positive, Trust]),
    ("teamwork", &[Positive, Trust]),
    ("terminate", &[Anger, Fear, Negative, Sadness]),
    ("terrible", &[Anger, Disgust, Fear, Negative, Sadness]),
    ("threat", &[Anger, Fear, Negative]),
    ("thrive", &[Joy, Positive]),
    ("tight", &[Negative]),
    ("toxic", &[Disgust, Negative]),
    ("trust", &[Positive, Trust]),
    ("trusted", &[Positive, Trust]),
    ("uncertain", &[Fear, Negative]),
    ("unexpected", &[Surprise]),
    ("unique", &[Positive, Surprise]),
    ("urgent", &[Anticipation, Fear, Negative, Surprise]),
    ("value", &[Positive]),
    ("vision", &[Anticipation, Positive]),
    ("warning", &[Fear, Negative]),
    ("welcome", &[Joy, Positive]),
    ("win", &[Anticipation, Joy, Positive]),
    ("wonderful", &[Joy, Positive, Surprise]),
    ("worry", &[Anticipation, Fear, Negative, Sadness]),
    ("wrong", &[Negative]),
];
