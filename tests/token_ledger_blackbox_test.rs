use multiversx_sc_scenario::imports::*;

use token_ledger::token_proxy;

const TOKEN_CODE_PATH: MxscPath = MxscPath::new("output/token-ledger.mxsc.json");
const TOKEN_ADDRESS: TestSCAddress = TestSCAddress::new("token-ledger");

const DEPLOYER: TestAddress = TestAddress::new("deployer");
const USER1: TestAddress = TestAddress::new("user1");
const USER2: TestAddress = TestAddress::new("user2");
const USER3: TestAddress = TestAddress::new("user3");

const INITIAL_SUPPLY: u64 = 2000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(TOKEN_CODE_PATH, token_ledger::ContractBuilder);
    blockchain
}

struct TokenTestState {
    world: ScenarioWorld,
}

impl TokenTestState {
    fn new() -> Self {
        let mut world = world();
        for account in [DEPLOYER, USER1, USER2, USER3] {
            world.account(account).nonce(1);
        }

        world
            .tx()
            .from(DEPLOYER)
            .typed(token_proxy::TokenLedgerProxy)
            .init("Token-T", "TT", 18u8, INITIAL_SUPPLY)
            .code(TOKEN_CODE_PATH)
            .new_address(TOKEN_ADDRESS)
            .run();

        Self { world }
    }

    fn transfer(&mut self, from: TestAddress, to: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(TOKEN_ADDRESS)
            .typed(token_proxy::TokenLedgerProxy)
            .transfer(to.to_address(), amount)
            .run();
    }

    fn approve(&mut self, owner: TestAddress, spender: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(owner)
            .to(TOKEN_ADDRESS)
            .typed(token_proxy::TokenLedgerProxy)
            .approve(spender.to_address(), amount)
            .run();
    }

    fn increase_allowance(&mut self, owner: TestAddress, spender: TestAddress, delta: u64) {
        self.world
            .tx()
            .from(owner)
            .to(TOKEN_ADDRESS)
            .typed(token_proxy::TokenLedgerProxy)
            .increase_allowance(spender.to_address(), delta)
            .run();
    }

    fn balance_of(&mut self, address: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(TOKEN_ADDRESS)
            .typed(token_proxy::TokenLedgerProxy)
            .balance_of(address.to_address())
            .returns(ReturnsResult)
            .run()
    }

    fn allowance(&mut self, owner: TestAddress, spender: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(TOKEN_ADDRESS)
            .typed(token_proxy::TokenLedgerProxy)
            .get_allowance(owner.to_address(), spender.to_address())
            .returns(ReturnsResult)
            .run()
    }

    fn total_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(TOKEN_ADDRESS)
            .typed(token_proxy::TokenLedgerProxy)
            .get_total_supply()
            .returns(ReturnsResult)
            .run()
    }

    fn check_balance(&mut self, address: TestAddress, expected: u64) {
        assert_eq!(self.balance_of(address), BigUint::from(expected));
    }

    fn check_allowance(&mut self, owner: TestAddress, spender: TestAddress, expected: u64) {
        assert_eq!(self.allowance(owner, spender), BigUint::from(expected));
    }

    /// Sum of every balance the tests can touch must equal total supply.
    fn check_conservation(&mut self) {
        let mut sum = BigUint::<StaticApi>::zero();
        for account in [DEPLOYER, USER1, USER2, USER3] {
            sum += self.balance_of(account);
        }
        assert_eq!(sum, self.total_supply());
    }
}

// ============================================================
// Deployment
// ============================================================

#[test]
fn deploy_assigns_total_supply_to_deployer() {
    let mut state = TokenTestState::new();

    state.check_balance(DEPLOYER, INITIAL_SUPPLY);
    assert_eq!(state.total_supply(), BigUint::from(INITIAL_SUPPLY));
    state.check_conservation();
}

#[test]
fn deploy_stores_metadata() {
    let mut state = TokenTestState::new();

    let name = state
        .world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .get_name()
        .returns(ReturnsResult)
        .run();
    assert_eq!(name, ManagedBuffer::from("Token-T"));

    let symbol = state
        .world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .get_symbol()
        .returns(ReturnsResult)
        .run();
    assert_eq!(symbol, ManagedBuffer::from("TT"));

    state
        .world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .get_decimals()
        .returns(ExpectValue(18u8))
        .run();

    let owner = state
        .world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .get_owner()
        .returns(ReturnsResult)
        .run();
    assert_eq!(owner, ManagedAddress::from_address(&DEPLOYER.to_address()));
}

// ============================================================
// Transfer
// ============================================================

#[test]
fn transfer_between_accounts() {
    let mut state = TokenTestState::new();

    state.transfer(DEPLOYER, USER1, 50);
    state.check_balance(USER1, 50);
    state.check_balance(DEPLOYER, 1950);

    state.transfer(USER1, USER2, 50);
    state.check_balance(USER1, 0);
    state.check_balance(USER2, 50);
    state.check_conservation();
}

#[test]
fn transfer_fails_without_enough_tokens() {
    let mut state = TokenTestState::new();

    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer(DEPLOYER.to_address(), 1u64)
        .returns(ExpectError(4, "ERC20: transfer amount exceeds balance"))
        .run();

    state.check_balance(DEPLOYER, INITIAL_SUPPLY);
    state.check_balance(USER1, 0);
}

#[test]
fn transfer_to_zero_address_fails() {
    let mut state = TokenTestState::new();

    state
        .world
        .tx()
        .from(DEPLOYER)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer(Address::zero(), 10u64)
        .returns(ExpectError(4, "ERC20: transfer to the zero address"))
        .run();

    state.check_balance(DEPLOYER, INITIAL_SUPPLY);
    state.check_conservation();
}

#[test]
fn transfer_to_self_keeps_balance() {
    let mut state = TokenTestState::new();

    state.transfer(DEPLOYER, DEPLOYER, 700);
    state.check_balance(DEPLOYER, INITIAL_SUPPLY);
    state.check_conservation();
}

#[test]
fn balances_update_after_several_transfers() {
    let mut state = TokenTestState::new();

    state.transfer(DEPLOYER, USER1, 50);
    state.transfer(DEPLOYER, USER2, 100);

    state.check_balance(DEPLOYER, INITIAL_SUPPLY - 150);
    state.check_balance(USER1, 50);
    state.check_balance(USER2, 100);
    state.check_conservation();
}

// ============================================================
// Allowances
// ============================================================

#[test]
fn allowance_defaults_to_zero() {
    let mut state = TokenTestState::new();

    state.check_allowance(DEPLOYER, USER1, 0);
}

#[test]
fn approve_sets_allowance() {
    let mut state = TokenTestState::new();

    state.approve(DEPLOYER, USER1, 10);
    state.check_allowance(DEPLOYER, USER1, 10);

    // absolute set, not additive
    state.approve(DEPLOYER, USER1, 3);
    state.check_allowance(DEPLOYER, USER1, 3);
}

#[test]
fn approve_to_zero_address_fails() {
    let mut state = TokenTestState::new();

    state
        .world
        .tx()
        .from(DEPLOYER)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .approve(Address::zero(), 5u64)
        .returns(ExpectError(4, "ERC20: approve to the zero address"))
        .run();
}

#[test]
fn increase_allowance_to_zero_address_fails() {
    let mut state = TokenTestState::new();

    state
        .world
        .tx()
        .from(DEPLOYER)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .increase_allowance(Address::zero(), 1u64)
        .returns(ExpectError(4, "ERC20: approve to the zero address"))
        .run();

    let allowance = state
        .world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .get_allowance(DEPLOYER.to_address(), Address::zero())
        .returns(ReturnsResult)
        .run();
    assert_eq!(allowance, BigUint::zero());
}

#[test]
fn decrease_allowance_to_zero_address_fails() {
    let mut state = TokenTestState::new();

    state
        .world
        .tx()
        .from(DEPLOYER)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .decrease_allowance(Address::zero(), 0u64)
        .returns(ExpectError(4, "ERC20: approve to the zero address"))
        .run();

    let allowance = state
        .world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .get_allowance(DEPLOYER.to_address(), Address::zero())
        .returns(ReturnsResult)
        .run();
    assert_eq!(allowance, BigUint::zero());
}

#[test]
fn increase_allowance_accumulates() {
    let mut state = TokenTestState::new();

    state.increase_allowance(USER1, DEPLOYER, 50);
    state.check_allowance(USER1, DEPLOYER, 50);
    state.increase_allowance(USER1, DEPLOYER, 50);
    state.check_allowance(USER1, DEPLOYER, 100);

    state.transfer(DEPLOYER, USER1, 50);
    state
        .world
        .tx()
        .from(DEPLOYER)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer_from(USER1.to_address(), USER2.to_address(), 50u64)
        .run();

    state.check_balance(USER2, 50);
    state.check_allowance(USER1, DEPLOYER, 50);
}

#[test]
fn decrease_allowance_subtracts() {
    let mut state = TokenTestState::new();

    state.increase_allowance(USER1, DEPLOYER, 50);
    state.increase_allowance(USER1, DEPLOYER, 50);

    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .decrease_allowance(DEPLOYER.to_address(), 50u64)
        .run();

    state.check_allowance(USER1, DEPLOYER, 50);
}

#[test]
fn decrease_allowance_below_zero_fails_and_keeps_allowance() {
    let mut state = TokenTestState::new();

    state.approve(USER1, DEPLOYER, 20);

    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .decrease_allowance(DEPLOYER.to_address(), 21u64)
        .returns(ExpectError(4, "ERC20: decreased allowance below zero"))
        .run();

    state.check_allowance(USER1, DEPLOYER, 20);
}

// ============================================================
// Transfer from
// ============================================================

#[test]
fn transfer_from_spends_allowance() {
    let mut state = TokenTestState::new();

    state.approve(DEPLOYER, USER1, 50);
    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer_from(DEPLOYER.to_address(), USER2.to_address(), 50u64)
        .run();

    state.check_balance(USER2, 50);
    state.check_balance(DEPLOYER, INITIAL_SUPPLY - 50);
    state.check_allowance(DEPLOYER, USER1, 0);
    state.check_conservation();
}

#[test]
fn transfer_from_over_allowance_changes_nothing() {
    let mut state = TokenTestState::new();

    state.approve(DEPLOYER, USER1, 30);
    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer_from(DEPLOYER.to_address(), USER2.to_address(), 31u64)
        .returns(ExpectError(4, "ERC20: insufficient allowance"))
        .run();

    state.check_balance(DEPLOYER, INITIAL_SUPPLY);
    state.check_balance(USER2, 0);
    state.check_allowance(DEPLOYER, USER1, 30);
}

#[test]
fn transfer_from_over_balance_changes_nothing() {
    let mut state = TokenTestState::new();

    state.transfer(DEPLOYER, USER1, 10);
    state.approve(USER1, USER2, 100);

    state
        .world
        .tx()
        .from(USER2)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer_from(USER1.to_address(), USER3.to_address(), 11u64)
        .returns(ExpectError(4, "ERC20: transfer amount exceeds balance"))
        .run();

    state.check_balance(USER1, 10);
    state.check_balance(USER3, 0);
    state.check_allowance(USER1, USER2, 100);
}

#[test]
fn transfer_from_to_zero_address_fails() {
    let mut state = TokenTestState::new();

    state.approve(DEPLOYER, USER1, 50);
    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer_from(DEPLOYER.to_address(), Address::zero(), 50u64)
        .returns(ExpectError(4, "ERC20: transfer to the zero address"))
        .run();

    state.check_allowance(DEPLOYER, USER1, 50);
}

#[test]
fn transfer_from_to_zero_address_fails_before_allowance_check() {
    let mut state = TokenTestState::new();

    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer_from(DEPLOYER.to_address(), Address::zero(), 50u64)
        .returns(ExpectError(4, "ERC20: transfer to the zero address"))
        .run();

    state.check_balance(DEPLOYER, INITIAL_SUPPLY);
    state.check_allowance(DEPLOYER, USER1, 0);
}

#[test]
fn zero_amount_operations_change_nothing() {
    let mut state = TokenTestState::new();

    state.transfer(USER1, USER2, 0);
    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer_from(DEPLOYER.to_address(), USER2.to_address(), 0u64)
        .run();
    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn(0u64)
        .run();
    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn_from(DEPLOYER.to_address(), 0u64)
        .run();

    state.check_balance(DEPLOYER, INITIAL_SUPPLY);
    state.check_balance(USER1, 0);
    state.check_balance(USER2, 0);
    state.check_allowance(DEPLOYER, USER1, 0);
    assert_eq!(state.total_supply(), BigUint::from(INITIAL_SUPPLY));
    state.check_conservation();
}

// ============================================================
// Burn
// ============================================================

#[test]
fn burn_reduces_balance_and_supply() {
    let mut state = TokenTestState::new();

    state.transfer(DEPLOYER, USER1, 50);
    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn(50u64)
        .run();

    state.check_balance(USER1, 0);
    assert_eq!(state.total_supply(), BigUint::from(INITIAL_SUPPLY - 50));
    state.check_conservation();

    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn(50u64)
        .returns(ExpectError(4, "ERC20 not enough funds"))
        .run();

    assert_eq!(state.total_supply(), BigUint::from(INITIAL_SUPPLY - 50));
}

#[test]
fn burn_from_spends_allowance() {
    let mut state = TokenTestState::new();

    state.transfer(DEPLOYER, USER1, 50);
    state.approve(USER1, DEPLOYER, 50);
    state.check_allowance(USER1, DEPLOYER, 50);

    state
        .world
        .tx()
        .from(DEPLOYER)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn_from(USER1.to_address(), 50u64)
        .run();

    state.check_balance(USER1, 0);
    state.check_allowance(USER1, DEPLOYER, 0);
    assert_eq!(state.total_supply(), BigUint::from(INITIAL_SUPPLY - 50));
    state.check_conservation();
}

#[test]
fn burn_from_empty_account_fails() {
    let mut state = TokenTestState::new();

    state.approve(USER1, DEPLOYER, 50);
    state
        .world
        .tx()
        .from(DEPLOYER)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn_from(USER1.to_address(), 50u64)
        .returns(ExpectError(4, "ERC20: not enough funds on account"))
        .run();

    state.check_allowance(USER1, DEPLOYER, 50);
    assert_eq!(state.total_supply(), BigUint::from(INITIAL_SUPPLY));
}

#[test]
fn burn_from_without_allowance_fails() {
    let mut state = TokenTestState::new();

    state.transfer(DEPLOYER, USER1, 50);
    state
        .world
        .tx()
        .from(USER2)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn_from(USER1.to_address(), 1u64)
        .returns(ExpectError(4, "ERC20: insufficient allowance"))
        .run();

    state.check_balance(USER1, 50);
    state.check_conservation();
}

// ============================================================
// Conservation over a mixed sequence
// ============================================================

#[test]
fn supply_matches_balances_after_mixed_calls() {
    let mut state = TokenTestState::new();

    state.transfer(DEPLOYER, USER1, 400);
    state.transfer(USER1, USER2, 150);
    state.approve(USER2, USER3, 100);
    state
        .world
        .tx()
        .from(USER3)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .transfer_from(USER2.to_address(), USER3.to_address(), 60u64)
        .run();
    state
        .world
        .tx()
        .from(USER3)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn_from(USER2.to_address(), 40u64)
        .run();
    state
        .world
        .tx()
        .from(USER1)
        .to(TOKEN_ADDRESS)
        .typed(token_proxy::TokenLedgerProxy)
        .burn(100u64)
        .run();

    state.check_balance(USER1, 150);
    state.check_balance(USER2, 50);
    state.check_balance(USER3, 60);
    state.check_allowance(USER2, USER3, 0);
    assert_eq!(state.total_supply(), BigUint::from(INITIAL_SUPPLY - 140));
    state.check_conservation();
}
