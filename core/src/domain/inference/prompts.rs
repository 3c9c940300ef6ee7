use crate::domain::classification::entities::AnimalType;

pub const CLASSIFICATION_PROMPT: &str = "Classify this image as one of the following animals: \
     cow, chicken, pig. Return ONLY the animal name (lowercase) and nothing else.";

pub fn health_assessment_prompt(animal_type: AnimalType) -> String {
    format!(
        "Analyze this {} for health issues. Look for:\n\
         1. Signs of life (breathing, movement, eye response)\n\
         2. Skin/feather condition (lesions, parasites, discoloration)\n\
         3. Posture and mobility (limping, inability to stand)\n\
         4. Eyes/nose/mouth (discharge, swelling, abnormalities)\n\
         5. General appearance (emaciation, dehydration)\n\n\
         Return your assessment in this exact format:\n\
         HEALTH_STATUS: [healthy/unhealthy/critical/dead]\n\
         CONFIDENCE: [0-100]%\n\
         OBSERVATIONS: [detailed observations]\n\
         KEY_ISSUES: [comma-separated list of issues found]",
        animal_type.prompt_noun()
    )
}
