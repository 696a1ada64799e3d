// Domain layer: palettes, layout geometry and the request vocabulary of the image API.

pub mod model;
