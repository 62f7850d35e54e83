//! Study plan tool — keyword-routed canned curricula.
//!
//! Goals mentioning the CSAT or math (수능 / 수학 / "csat" / "math") get a
//! four-stage exam plan, blogging goals (블로그 / "blog") a three-stage
//! writing plan, and everything else a generic plan.

use async_trait::async_trait;
use reagent_core::{Tool, ToolError};

/// Builds a staged study plan from a free-text goal.
pub struct StudyPlanTool;

#[async_trait]
impl Tool for StudyPlanTool {
    fn name(&self) -> &str {
        "create_study_plan"
    }

    fn description(&self) -> &str {
        "Create a staged study plan from a description of the learner and their goal."
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "goal": {
                    "type": "string",
                    "description": "Who is studying and what they want to achieve"
                }
            },
            "required": ["goal"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<String, ToolError> {
        let goal = extract_goal(&input)?;
        Ok(plan_for(&goal))
    }
}

fn extract_goal(input: &serde_json::Value) -> Result<String, ToolError> {
    match input {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Object(map) => map
            .get("goal")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| ToolError::InvalidInput("Missing 'goal' field".into())),
        _ => Err(ToolError::InvalidInput(
            "Expected a goal string or an object with a 'goal' field".into(),
        )),
    }
}

fn plan_for(goal: &str) -> String {
    let lowered = goal.to_lowercase();
    if ["수능", "수학", "csat", "math"].iter().any(|k| lowered.contains(k)) {
        exam_math_plan(goal)
    } else if ["블로그", "blog"].iter().any(|k| lowered.contains(k)) {
        blog_writing_plan(goal)
    } else {
        generic_plan(goal)
    }
}

fn exam_math_plan(goal: &str) -> String {
    format!(
        "# Math Exam Study Plan\n\
         \n\
         **Goal:** {goal}\n\
         \n\
         ## Stage 1 — Concept Review (weeks 1-4)\n\
         - Rebuild fundamentals unit by unit; keep an error notebook\n\
         \n\
         ## Stage 2 — Problem-Type Drills (weeks 5-8)\n\
         - Drill each recurring problem type until the approach is automatic\n\
         \n\
         ## Stage 3 — Past-Exam Analysis (weeks 9-12)\n\
         - Work through past papers; classify every miss by cause\n\
         \n\
         ## Stage 4 — Timed Mock Exams (weeks 13-16)\n\
         - Full-length mocks under exam conditions; tune time allocation\n"
    )
}

fn blog_writing_plan(goal: &str) -> String {
    format!(
        "# Blog Writing Study Plan\n\
         \n\
         **Goal:** {goal}\n\
         \n\
         ## Stage 1 — Research and Outlines (weeks 1-2)\n\
         - Pick a niche, study well-performing posts, draft ten outlines\n\
         \n\
         ## Stage 2 — Weekly Writing Practice (weeks 3-8)\n\
         - Publish one post a week; rewrite the weakest paragraph of each\n\
         \n\
         ## Stage 3 — Publishing and Feedback (weeks 9-12)\n\
         - Build a publishing cadence; fold reader feedback into revisions\n"
    )
}

fn generic_plan(goal: &str) -> String {
    format!(
        "# Study Plan\n\
         \n\
         **Goal:** {goal}\n\
         \n\
         ## Stage 1 — Assess\n\
         - Map what you already know against what the goal requires\n\
         \n\
         ## Stage 2 — Practice\n\
         - Schedule focused sessions on the weakest areas first\n\
         \n\
         ## Stage 3 — Review\n\
         - Test yourself weekly and adjust the plan to what the results show\n"
    )
}
