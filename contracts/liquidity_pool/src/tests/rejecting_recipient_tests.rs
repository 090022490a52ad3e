use crate::{LiquidityPool, LiquidityPoolClient};
use mock_asset::{MockAsset, MockAssetClient};
use soroban_sdk::{testutils::Address as _, Address, Env};

struct RejectingRecipientTest<'a> {
    owner: Address,
    user: Address,
    recipient: Address,
    asset: MockAssetClient<'a>,
    pool: LiquidityPoolClient<'a>,
}

impl<'a> RejectingRecipientTest<'a> {
    fn setup(env: &Env) -> Self {
        env.mock_all_auths();

        let admin = Address::generate(env);
        let owner = Address::generate(env);
        let user = Address::generate(env);
        let recipient = Address::generate(env);

        let asset_id = env.register(MockAsset, (&admin,));
        let asset = MockAssetClient::new(env, &asset_id);

        let pool_id = env.register(LiquidityPool, (&owner, &asset_id));
        let pool = LiquidityPoolClient::new(env, &pool_id);

        asset.mint(&user, &1_000);
        pool.deposit(&user, &1_000);

        RejectingRecipientTest {
            owner,
            user,
            recipient,
            asset,
            pool,
        }
    }
}

#[test]
fn test_rejected_payout_reverts_withdraw() {
    let env = Env::default();
    let test = RejectingRecipientTest::setup(&env);

    test.asset.set_blocked(&test.recipient, &true);

    // the asset contract aborts the payout; no pool error is involved
    let result = test.pool.try_withdraw(&test.owner, &test.recipient, &400);
    assert!(matches!(result, Err(Err(_))));

    assert_eq!(test.pool.pool_balance(), 1_000);
    assert_eq!(test.asset.balance(&test.pool.address), 1_000);
    assert_eq!(test.asset.balance(&test.recipient), 0);
    assert_eq!(test.pool.balances(&test.user), 1_000);

    // the same payout to an accepting address goes through
    test.pool.withdraw(&test.owner, &test.user, &400);
    assert_eq!(test.pool.pool_balance(), 600);
    assert_eq!(test.asset.balance(&test.user), 400);
}

#[test]
fn test_payout_succeeds_once_recipient_accepts() {
    let env = Env::default();
    let test = RejectingRecipientTest::setup(&env);

    test.asset.set_blocked(&test.recipient, &true);
    assert!(matches!(
        test.pool.try_withdraw(&test.owner, &test.recipient, &400),
        Err(Err(_))
    ));

    test.asset.set_blocked(&test.recipient, &false);
    test.pool.withdraw(&test.owner, &test.recipient, &400);

    assert_eq!(test.pool.pool_balance(), 600);
    assert_eq!(test.asset.balance(&test.recipient), 400);
}
