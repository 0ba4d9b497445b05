//! Landing page content endpoints: hero slides and featured collections.

use crate::client::ApiClient;
use crate::error::FetchError;
use atelier_commerce::content::{FeaturedCollection, HeroSlide};
use atelier_commerce::{CollectionId, SlideId};

impl ApiClient {
    /// Fetch hero slides in carousel order.
    pub fn hero_slides(&self) -> Result<Vec<HeroSlide>, FetchError> {
        self.send(self.get("/content/hero-slides"))?
            .error_for_status()?
            .json()
    }

    /// Create a hero slide (admin).
    pub fn create_hero_slide(&self, slide: &HeroSlide) -> Result<HeroSlide, FetchError> {
        self.send(self.post("/content/hero-slides").json(slide)?)?
            .error_for_status()?
            .json()
    }

    /// Update a hero slide (admin).
    pub fn update_hero_slide(&self, slide: &HeroSlide) -> Result<HeroSlide, FetchError> {
        self.send(
            self.put(&format!("/content/hero-slides/{}", slide.id))
                .json(slide)?,
        )?
        .error_for_status()?
        .json()
    }

    /// Delete a hero slide (admin).
    pub fn delete_hero_slide(&self, id: &SlideId) -> Result<(), FetchError> {
        self.send(self.delete(&format!("/content/hero-slides/{}", id)))?
            .error_for_status()?;
        Ok(())
    }

    /// Fetch featured collections in display order.
    pub fn featured_collections(&self) -> Result<Vec<FeaturedCollection>, FetchError> {
        self.send(self.get("/content/featured-collections"))?
            .error_for_status()?
            .json()
    }

    /// Create a featured collection (admin).
    pub fn create_featured_collection(
        &self,
        collection: &FeaturedCollection,
    ) -> Result<FeaturedCollection, FetchError> {
        self.send(self.post("/content/featured-collections").json(collection)?)?
            .error_for_status()?
            .json()
    }

    /// Update a featured collection (admin).
    pub fn update_featured_collection(
        &self,
        collection: &FeaturedCollection,
    ) -> Result<FeaturedCollection, FetchError> {
        self.send(
            self.put(&format!("/content/featured-collections/{}", collection.id))
                .json(collection)?,
        )?
        .error_for_status()?
        .json()
    }

    /// Delete a featured collection (admin).
    pub fn delete_featured_collection(&self, id: &CollectionId) -> Result<(), FetchError> {
        self.send(self.delete(&format!("/content/featured-collections/{}", id)))?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;
    use crate::transport::{HttpTransport, Request, ScriptedTransport};
    use std::rc::Rc;

    struct Shared(Rc<ScriptedTransport>);
    impl HttpTransport for Shared {
        fn execute(&self, request: Request) -> Result<Response, FetchError> {
            self.0.execute(request)
        }
    }

    #[test]
    fn test_hero_slides_parse() {
        let body = br#"[{"id":"s1","headline":"New Season","image":"/hero.jpg","position":0}]"#
            .to_vec();
        let transport = Rc::new(ScriptedTransport::new().respond(Response::json_body(200, body)));
        let client = ApiClient::new("https://api.example", Box::new(Shared(Rc::clone(&transport))));

        let slides = client.hero_slides().unwrap();
        assert_eq!(slides.len(), 1);
        assert!(slides[0].active); // defaulted by the model
        assert_eq!(
            transport.requests()[0].url,
            "https://api.example/content/hero-slides"
        );
    }

    #[test]
    fn test_update_collection_puts_to_id_path() {
        let collection = FeaturedCollection::new("Party Season", "party-season");
        let body = serde_json::to_vec(&collection).unwrap();
        let transport = Rc::new(ScriptedTransport::new().respond(Response::json_body(200, body)));
        let client = ApiClient::new("https://api.example", Box::new(Shared(Rc::clone(&transport))));

        client.update_featured_collection(&collection).unwrap();
        let request = &transport.requests()[0];
        assert_eq!(request.method.as_str(), "PUT");
        assert_eq!(
            request.url,
            format!(
                "https://api.example/content/featured-collections/{}",
                collection.id
            )
        );
    }
}
