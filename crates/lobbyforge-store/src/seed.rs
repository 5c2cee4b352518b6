//! Demo data set used by `Store::seeded`.

use chrono::Utc;
use lobbyforge_model::{
    Account, BagEntry, Item, ItemId, Mail, MailAttachment, Notice, Player,
    PlayerId,
};

use crate::World;

/// The demo account's username, id, and player id.
pub(crate) const DEMO_PLAYER: &str = "demo";

impl World {
    /// Builds the demo world: a two-item catalog, a welcome notice, and a
    /// `demo` account with a level-10 player, one welcome mail, and a bag.
    pub fn demo() -> Self {
        let now = Utc::now();
        let demo = PlayerId::new(DEMO_PLAYER);

        let items = vec![
            Item {
                id: ItemId::new("potion"),
                name: "Small Potion".into(),
                rarity: "common".into(),
                price: 25,
            },
            Item {
                id: ItemId::new("sword"),
                name: "Bronze Sword".into(),
                rarity: "uncommon".into(),
                price: 120,
            },
        ];

        let notices = vec![Notice {
            id: "welcome".into(),
            title: "Welcome".into(),
            body: "The server is up. Have fun!".into(),
            severity: "info".into(),
            created_at: now,
        }];

        let mut world = World {
            items,
            notices,
            ..World::default()
        };

        world.accounts.insert(
            demo.clone(),
            Account {
                id: demo.clone(),
                username: DEMO_PLAYER.into(),
                password: "password".into(),
                token: "demo-token".into(),
            },
        );
        world.players.insert(
            demo.clone(),
            Player {
                id: demo.clone(),
                name: "DemoPlayer".into(),
                level: 10,
                experience: 2200,
                last_login: now,
            },
        );
        world.mails.insert(
            demo.clone(),
            vec![Mail {
                id: "m1".into(),
                subject: "Welcome pack".into(),
                body: "Thanks for playing".into(),
                attachments: vec![MailAttachment {
                    item_id: ItemId::new("potion"),
                    quantity: 3,
                }],
            }],
        );
        world.bags.insert(
            demo,
            vec![BagEntry {
                item_id: ItemId::new("potion"),
                quantity: 2,
            }],
        );

        world
    }
}
