use chrono::Offset;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub default_labels: Vec<String>,
    pub image_extensions: Vec<String>,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
}

impl Config {
    pub fn labels_url(&self) -> String {
        format!("{}class_labels", self.api_url)
    }

    pub fn classify_url(&self) -> String {
        format!("{}classify-image", self.api_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api/".to_string(),
            default_labels: vec![
                "lionel_messi".to_string(),
                "maria_sharapova".to_string(),
                "roger_federer".to_string(),
                "serena_williams".to_string(),
                "virat_kohli".to_string(),
            ],
            image_extensions: ["png", "jpg", "jpeg", "webp", "gif", "bmp"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            logger_timezone: utc(),
            window_size: [720.0, 820.0],
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
